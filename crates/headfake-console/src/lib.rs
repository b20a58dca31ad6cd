//! headfake-console — terminal implementations of the presentation surfaces.
//!
//! Maps the game's notification and audio collaborators onto what a
//! terminal actually has: stderr lines and the bell character.

pub mod audio;
pub mod toast;

pub use audio::{Silent, TerminalBell};
pub use toast::ConsoleNotifier;
