//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, cache, fetch)
//! - Processing statistics tracking (errors and info metrics)
//! - Error categorization for fetch failures
//!
//! Report building never fails outright. Failures are categorized and counted
//! here so they stay visible in logs and statistics.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, categorize_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{CacheError, ErrorType, FetchError, InfoType, InitializationError};
