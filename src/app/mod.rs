//! Application helpers used by the run loop.
//!
//! Host input normalization and statistics printing.

pub mod host;
pub mod statistics;

// Re-export public API
pub use host::validate_and_normalize_host;
pub use statistics::print_error_statistics;
