//! On-disk cache store.
//!
//! Each key is stored as one pretty-printed JSON file holding the raw API
//! response and the time it was cached.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use super::CacheStore;
use crate::error_handling::CacheError;

/// Metadata and payload of a cached API response
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileCacheEntry {
    key: String,
    value: String,
    cached_at: SystemTime,
    ttl_secs: u64,
}

impl FileCacheEntry {
    fn is_expired(&self) -> bool {
        // A clock that moved backwards counts as a fresh entry
        let age = self.cached_at.elapsed().unwrap_or_default();
        age >= Duration::from_secs(self.ttl_secs)
    }
}

/// Cache store that keeps one JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// Creates the cache directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| CacheError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the cache files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

/// Maps a key to a filesystem-safe, collision-free file stem.
///
/// ASCII alphanumerics, `-` and `.` pass through; every other byte becomes `_xx`.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'.' {
            encoded.push(byte as char);
        } else {
            let _ = write!(encoded, "_{:02x}", byte);
        }
    }
    encoded
}

impl CacheStore for FileCache {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;
        let entry: FileCacheEntry = serde_json::from_str(&content)?;

        if entry.is_expired() {
            if let Err(e) = std::fs::remove_file(&path) {
                log::debug!("Failed to remove expired cache file {}: {}", path.display(), e);
            }
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let path = self.entry_path(key);
        let entry = FileCacheEntry {
            key: key.to_string(),
            value: value.to_string(),
            cached_at: SystemTime::now(),
            ttl_secs: ttl.as_secs(),
        };

        let content = serde_json::to_string_pretty(&entry)?;
        std::fs::write(&path, content).map_err(|source| CacheError::Io { path, source })?;
        Ok(())
    }
}
