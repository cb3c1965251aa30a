//! Error type definitions.
//!
//! This module defines the error types and the error/info categories counted
//! while building reports.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error preparing the response cache.
    #[error("Cache initialization error: {0}")]
    CacheError(#[from] CacheError),
}

/// Error types for cache store operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Filesystem error reading or writing a cache entry.
    #[error("Cache I/O error at {path}: {source}")]
    Io {
        /// Path of the entry or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A stored entry could not be (de)serialized.
    #[error("Cache entry serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("Cache lock poisoned")]
    LockPoisoned,
}

/// Error types for API requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read, ...).
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The endpoint URL could not be built from the configured API base.
    #[error("Invalid API base URL {url}: {reason}")]
    InvalidUrl {
        /// Configured API base URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The API answered with a status other than 200.
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus {
        /// Status code received
        status: u16,
        /// Requested URL
        url: String,
    },
}

/// Types of errors that can occur while building a report.
///
/// None of these abort a report; they are counted and logged, and the
/// affected fields stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestUnexpectedStatus,
    // DNS errors
    DnsResolutionError,
    // Payload errors
    PayloadParseError,
    // Cache errors
    CacheReadError,
    CacheWriteError,
}

/// Types of informational metrics recorded while building a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    CacheHit,
    CacheMiss,
    CacheStore,
    HostNotFound,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestUnexpectedStatus => "Unexpected HTTP status (not 200)",
            ErrorType::DnsResolutionError => "DNS resolution error",
            ErrorType::PayloadParseError => "API payload is not a JSON object",
            ErrorType::CacheReadError => "Cache read error",
            ErrorType::CacheWriteError => "Cache write error",
        }
    }
}

impl std::fmt::Display for InfoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InfoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::CacheHit => "Cache hit",
            InfoType::CacheMiss => "Cache miss",
            InfoType::CacheStore => "Response cached",
            InfoType::HostNotFound => "Host reported as not found",
        }
    }
}
