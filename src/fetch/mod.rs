//! Green Web Foundation data fetching.
//!
//! [`GreenDataFetcher`] looks up a host's green hosting status and the carbon
//! intensity of its network location, caching both raw responses, and merges
//! them into a [`SustainabilityReport`].
//!
//! Nothing here returns an error to the caller: network failures, non-200
//! statuses, DNS failures and unparsable bodies all leave the affected fields
//! empty. They are logged and counted in [`ProcessingStats`] instead.

mod request;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde_json::{Map, Value};
use url::Url;

use crate::cache::{cache_key, CacheSlot, CacheStore};
use crate::config::{CacheKeyMode, Config, FieldMapping};
use crate::dns::{resolve_host_to_ip, HostResolver};
use crate::error_handling::{
    update_error_stats, ErrorType, FetchError, InfoType, ProcessingStats,
};
use crate::models::SustainabilityReport;
use crate::report::assemble_report;

use request::{co2_intensity_url, get_body, greencheck_url};

/// Settings copied out of [`Config`] that the fetcher needs per request.
#[derive(Debug, Clone)]
struct FetchSettings {
    api_base_url: String,
    cache_keys: CacheKeyMode,
    field_mapping: FieldMapping,
    cache_ttl: Duration,
}

/// Fetches, caches and merges green hosting and CO2 intensity data.
pub struct GreenDataFetcher {
    client: Arc<reqwest::Client>,
    resolver: Arc<dyn HostResolver>,
    cache: Arc<dyn CacheStore>,
    stats: Arc<ProcessingStats>,
    settings: FetchSettings,
}

impl GreenDataFetcher {
    /// Creates a fetcher from shared resources.
    ///
    /// API base URL, cache key mode, field mapping and cache TTL are taken from `config`.
    pub fn new(
        config: &Config,
        client: Arc<reqwest::Client>,
        resolver: Arc<dyn HostResolver>,
        cache: Arc<dyn CacheStore>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            resolver,
            cache,
            stats,
            settings: FetchSettings {
                api_base_url: config.api_base_url.clone(),
                cache_keys: config.cache_keys,
                field_mapping: config.field_mapping,
                cache_ttl: config.cache_ttl(),
            },
        }
    }

    /// Statistics recorded by this fetcher.
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Returns the greencheck payload for `hostname`, from cache or the API.
    ///
    /// On a cache miss the API is queried and a 200 response body is cached.
    /// Returns `None` if nothing was cached and the request failed, or if the
    /// body is not a JSON object.
    pub async fn fetch_green_check(&self, hostname: &str) -> Option<Map<String, Value>> {
        let key = cache_key(self.settings.cache_keys, CacheSlot::GreenCheck, hostname);

        let body = match self.read_cache(&key) {
            Some(body) => Some(body),
            None => {
                let url = greencheck_url(&self.settings.api_base_url, hostname);
                self.fetch_and_store(&key, url).await
            }
        };

        body.and_then(|body| self.parse_payload(&body))
    }

    /// Returns the CO2 intensity payload for the first address `hostname`
    /// resolves to, from cache or the API.
    ///
    /// If resolution fails nothing is requested or cached and `None` is returned.
    pub async fn fetch_co2_intensity(&self, hostname: &str) -> Option<Map<String, Value>> {
        let key = cache_key(self.settings.cache_keys, CacheSlot::Co2Intensity, hostname);

        let body = match self.read_cache(&key) {
            Some(body) => Some(body),
            None => {
                let ip = match resolve_host_to_ip(hostname, self.resolver.as_ref()).await {
                    Ok(ip) => ip,
                    Err(e) => {
                        warn!("Failed to resolve {}: {}", hostname, e);
                        self.stats.increment_error(ErrorType::DnsResolutionError);
                        return None;
                    }
                };
                debug!("Resolved {} to {}", hostname, ip);
                let url = co2_intensity_url(&self.settings.api_base_url, &ip.to_string());
                self.fetch_and_store(&key, url).await
            }
        };

        body.and_then(|body| self.parse_payload(&body))
    }

    /// Builds the sustainability report for `hostname`.
    ///
    /// The greencheck is fetched first, then the CO2 intensity. Missing data
    /// shows up as empty fields, never as an error.
    pub async fn build_report(&self, hostname: &str) -> SustainabilityReport {
        let green_check = self.fetch_green_check(hostname).await;
        let co2_intensity = self.fetch_co2_intensity(hostname).await;

        let report = assemble_report(
            green_check.as_ref(),
            co2_intensity.as_ref(),
            self.settings.field_mapping,
        );
        if report.green.is_not_found() {
            self.stats.increment_info(InfoType::HostNotFound);
        }
        report
    }

    /// Cached body for `key`. Read failures count as a miss.
    fn read_cache(&self, key: &str) -> Option<String> {
        match self.cache.get(key) {
            Ok(Some(body)) => {
                debug!("Cache hit for {}", key);
                self.stats.increment_info(InfoType::CacheHit);
                Some(body)
            }
            Ok(None) => {
                debug!("Cache miss for {}", key);
                self.stats.increment_info(InfoType::CacheMiss);
                None
            }
            Err(e) => {
                warn!("Failed to read cache entry {}: {}", key, e);
                self.stats.increment_error(ErrorType::CacheReadError);
                None
            }
        }
    }

    /// Requests `url` and caches a 200 body under `key`.
    ///
    /// The body is returned even if caching it fails.
    async fn fetch_and_store(&self, key: &str, url: Result<Url, FetchError>) -> Option<String> {
        let result = match url {
            Ok(url) => get_body(&self.client, url).await,
            Err(e) => Err(e),
        };
        let body = match result {
            Ok(body) => body,
            Err(e) => {
                warn!("API request for {} failed: {}", key, e);
                update_error_stats(&self.stats, &e);
                return None;
            }
        };

        match self.cache.set(key, &body, self.settings.cache_ttl) {
            Ok(()) => self.stats.increment_info(InfoType::CacheStore),
            Err(e) => {
                warn!("Failed to cache response for {}: {}", key, e);
                self.stats.increment_error(ErrorType::CacheWriteError);
            }
        }
        Some(body)
    }

    /// Parses a response body, accepting only JSON objects.
    fn parse_payload(&self, body: &str) -> Option<Map<String, Value>> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(payload)) => Some(payload),
            Ok(other) => {
                debug!("Ignoring non-object API payload: {}", other);
                self.stats.increment_error(ErrorType::PayloadParseError);
                None
            }
            Err(e) => {
                debug!("Ignoring unparsable API payload: {}", e);
                self.stats.increment_error(ErrorType::PayloadParseError);
                None
            }
        }
    }
}
