//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CACHE_TTL, DEFAULT_API_BASE_URL, DEFAULT_CACHE_DIR, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How cache keys are derived for API responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CacheKeyMode {
    /// One slot per endpoint and hostname
    PerHost,
    /// One fixed slot per endpoint shared by every hostname (legacy behavior).
    ///
    /// A cached answer for one host is served for every other host until it expires.
    Global,
}

/// Which payload fields the report is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldMapping {
    /// Byte-for-byte parity with the legacy tool:
    /// CO2 fields are read from the greencheck payload, every supporting document
    /// repeats the top-level `title`/`link`, and `checked_ip` copies the `ip` key.
    Legacy,
    /// Each field is read from the payload and entry it naturally belongs to.
    Corrected,
}

/// Library and CLI configuration.
///
/// Parsed from the command line (every option can also come from a
/// `GREEN_STATUS_*` environment variable) or built programmatically.
///
/// # Examples
///
/// ```no_run
/// use green_status::{CacheKeyMode, Config};
///
/// let config = Config {
///     hostnames: vec!["example.com".to_string()],
///     cache_keys: CacheKeyMode::PerHost,
///     memory_cache: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "green_status",
    version,
    about = "Checks green hosting status and grid carbon intensity for hosts"
)]
pub struct Config {
    /// Hostnames (or URLs) to check
    #[arg(required = true, value_name = "HOST")]
    pub hostnames: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "GREEN_STATUS_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "GREEN_STATUS_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, env = "GREEN_STATUS_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "GREEN_STATUS_USER_AGENT")]
    pub user_agent: String,

    /// Base URL of the Green Web Foundation API
    #[arg(long, default_value = DEFAULT_API_BASE_URL, env = "GREEN_STATUS_API_BASE_URL")]
    pub api_base_url: String,

    /// Directory for the on-disk response cache
    #[arg(long, default_value = DEFAULT_CACHE_DIR, env = "GREEN_STATUS_CACHE_DIR")]
    pub cache_dir: PathBuf,

    /// Keep cached responses in memory only (nothing is written to disk)
    #[arg(long, env = "GREEN_STATUS_MEMORY_CACHE")]
    pub memory_cache: bool,

    /// Cache entry lifetime in seconds
    #[arg(long, default_value_t = CACHE_TTL.as_secs(), env = "GREEN_STATUS_CACHE_TTL_SECS")]
    pub cache_ttl_secs: u64,

    /// Cache key derivation
    #[arg(long, value_enum, default_value_t = CacheKeyMode::PerHost, env = "GREEN_STATUS_CACHE_KEYS")]
    pub cache_keys: CacheKeyMode,

    /// Field mapping used to build reports
    #[arg(long, value_enum, default_value_t = FieldMapping::Legacy, env = "GREEN_STATUS_FIELD_MAPPING")]
    pub field_mapping: FieldMapping,

    /// Disable TLS certificate verification (legacy behavior)
    #[arg(long, env = "GREEN_STATUS_INSECURE")]
    pub insecure: bool,

    /// Print error and cache statistics at the end of the run
    #[arg(long)]
    pub show_stats: bool,
}

impl Config {
    /// Lifetime of cache entries written during this run.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Per-request HTTP timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostnames: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            memory_cache: false,
            cache_ttl_secs: CACHE_TTL.as_secs(),
            cache_keys: CacheKeyMode::PerHost,
            field_mapping: FieldMapping::Legacy,
            insecure: false,
            show_stats: false,
        }
    }
}
