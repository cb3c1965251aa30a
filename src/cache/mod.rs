//! Response cache.
//!
//! API responses are cached as opaque JSON text under string keys with a
//! time-to-live. Two stores are provided:
//! - [`MemoryCache`]: process-local, used by tests and `--memory-cache`
//! - [`FileCache`]: one JSON file per key, survives between runs
//!
//! Keys are derived by [`cache_key`] according to the configured
//! [`CacheKeyMode`].

mod file;
mod memory;

use std::time::Duration;

use crate::config::CacheKeyMode;
use crate::error_handling::CacheError;

pub use file::FileCache;
pub use memory::MemoryCache;

/// A key-value store for serialized API responses.
///
/// Implementations must treat expired entries as absent.
pub trait CacheStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if absent or expired.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl`, replacing any previous value.
    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
}

/// The API endpoint a cache entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSlot {
    GreenCheck,
    Co2Intensity,
}

impl CacheSlot {
    fn base_key(self) -> &'static str {
        match self {
            CacheSlot::GreenCheck => crate::config::GREENCHECK_CACHE_KEY,
            CacheSlot::Co2Intensity => crate::config::CO2_INTENSITY_CACHE_KEY,
        }
    }
}

/// Builds the cache key for `slot` and `hostname`.
///
/// In [`CacheKeyMode::Global`] the hostname is ignored and every host shares
/// one fixed key per slot.
pub fn cache_key(mode: CacheKeyMode, slot: CacheSlot, hostname: &str) -> String {
    match mode {
        CacheKeyMode::Global => slot.base_key().to_string(),
        CacheKeyMode::PerHost => format!("{}:{}", slot.base_key(), hostname.to_ascii_lowercase()),
    }
}
