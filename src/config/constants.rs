//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including API endpoints, timeouts, cache settings and input limits.

use std::time::Duration;

// Green Web Foundation API
/// Base URL of the Green Web Foundation admin API
pub const DEFAULT_API_BASE_URL: &str = "https://admin.thegreenwebfoundation.org";
/// Path prefix of the green-hosting check endpoint (hostname is appended)
pub const GREENCHECK_PATH: &str = "/api/v3/greencheck/";
/// Path prefix of the IP to CO2 intensity endpoint (IP address is appended)
pub const CO2_INTENSITY_PATH: &str = "/api/v3/ip-to-co2intensity/";

// Network operation timeouts
/// Per-request HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// DNS query attempts before giving up
pub const DNS_ATTEMPTS: usize = 2;

/// Default User-Agent string for API requests.
pub const DEFAULT_USER_AGENT: &str = concat!("green_status/", env!("CARGO_PKG_VERSION"));

// Cache
/// Cache entry lifetime: 24 hours
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// Default directory for the on-disk response cache
pub const DEFAULT_CACHE_DIR: &str = ".green_status_cache";
/// Cache key (or key prefix in per-host mode) for greencheck responses
pub const GREENCHECK_CACHE_KEY: &str = "green_status_greencheck";
/// Cache key (or key prefix in per-host mode) for CO2 intensity responses
pub const CO2_INTENSITY_CACHE_KEY: &str = "green_status_co2intensity";

// Number formatting
/// Fractional digits kept for carbon intensity values
pub const INTENSITY_DECIMALS: usize = 3;
/// Fractional digits kept for the fossil generation share
pub const FOSSIL_DECIMALS: usize = 2;
/// Suffix appended to the formatted fossil generation share
pub const PERCENT_SUFFIX: &str = " %";

// Input limits
/// Maximum accepted length of a hostname/URL argument
pub const MAX_HOST_INPUT_LENGTH: usize = 2048;

// HTTP status codes
/// The only status whose body is cached and used
pub const HTTP_STATUS_OK: u16 = 200;
