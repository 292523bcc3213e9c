//! # soothe_core
//!
//! Core domain logic for Soothe: deciding what to say back to a message.

pub mod config;
pub mod provider;
pub mod reply;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
