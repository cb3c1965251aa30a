//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP client (timeout, user agent, TLS verification)
//! - DNS resolver
//! - Response cache store
//! - Logger

mod client;
mod logger;
mod resolver;

use std::sync::Arc;

use crate::cache::{CacheStore, FileCache, MemoryCache};
use crate::config::Config;
use crate::error_handling::InitializationError;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the response cache selected by the config.
///
/// Uses an in-memory store when `memory_cache` is set, otherwise a
/// [`FileCache`] rooted at `cache_dir` (created if missing).
///
/// # Errors
///
/// Returns `InitializationError::CacheError` if the cache directory cannot be created.
pub fn init_cache_store(config: &Config) -> Result<Arc<dyn CacheStore>, InitializationError> {
    if config.memory_cache {
        log::debug!("Using in-memory response cache");
        return Ok(Arc::new(MemoryCache::new()));
    }

    let cache = FileCache::new(&config.cache_dir)?;
    log::debug!("Using response cache at {}", cache.dir().display());
    Ok(Arc::new(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_init_cache_store_memory() {
        let temp_dir = TempDir::new().unwrap();
        let cache_dir = temp_dir.path().join("never_created");
        let config = Config {
            memory_cache: true,
            cache_dir: cache_dir.clone(),
            ..Default::default()
        };

        let cache = init_cache_store(&config).unwrap();
        cache.set("key", "value", Duration::from_secs(60)).unwrap();
        assert_eq!(cache.get("key").unwrap(), Some("value".to_string()));
        assert!(!cache_dir.exists(), "Memory cache must not touch the disk");
    }

    #[test]
    fn test_init_cache_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let cache_dir = temp_dir.path().join("cache");
        let config = Config {
            cache_dir: cache_dir.clone(),
            ..Default::default()
        };

        let cache = init_cache_store(&config).unwrap();
        cache.set("key", "value", Duration::from_secs(60)).unwrap();
        assert!(cache_dir.is_dir());
        assert_eq!(cache.get("key").unwrap(), Some("value".to_string()));
    }

    #[test]
    fn test_init_cache_store_file_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = Config {
            cache_dir: blocker.join("cache"),
            ..Default::default()
        };

        let result = init_cache_store(&config);
        assert!(matches!(result, Err(InitializationError::CacheError(_))));
    }
}
