//! headfake-sources — headline source integrations.
//!
//! Implements the `HeadlineSource` trait for the reddit listing API, local
//! TOML banks, and a scripted mock, allowing headfake to draw headlines
//! from multiple backends.

pub mod config;
pub mod error;
pub mod file;
pub mod mock;
pub mod reddit;

pub use config::{create_source, load_config, HeadfakeConfig, SourceConfig};
pub use error::SourceError;
