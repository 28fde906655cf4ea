//! # justia_core
//!
//! Core domain logic for Justia: reference tables, the offline responder,
//! the AI provider gateway and the reply engine that ties them together.

pub mod assistant;
pub mod data;
pub mod language;
pub mod mock;
pub mod prompt;
pub mod provider;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
