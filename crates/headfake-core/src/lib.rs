//! headfake-core — Pairing engine, scoring, and game session.
//!
//! This crate defines the fundamental data model, traits, and game logic
//! that the entire headfake system builds on.

pub mod bank;
pub mod engine;
pub mod model;
pub mod score;
pub mod session;
pub mod traits;
