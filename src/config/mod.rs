//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API endpoints, timeouts, cache settings)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{CacheKeyMode, Config, FieldMapping, LogFormat, LogLevel};
