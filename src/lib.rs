//! green_status library: green hosting and grid carbon intensity lookups
//!
//! This library queries the Green Web Foundation API for whether a host runs on
//! green energy and for the carbon intensity of the grid its IP address sits on.
//! Raw API responses are cached (24 hours by default) and both answers are merged
//! into one [`SustainabilityReport`] per host.
//!
//! # Example
//!
//! ```no_run
//! use green_status::{run_checks, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     hostnames: vec!["example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! for host in run_checks(config).await? {
//!     println!("{}: {}", host.hostname, serde_json::to_string(&host.report)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod cache;
pub mod config;
pub mod dns;
pub mod error_handling;
mod fetch;
pub mod html;
pub mod initialization;
pub mod models;
pub mod report;

// Re-export public API
pub use app::validate_and_normalize_host;
pub use cache::{CacheStore, FileCache, MemoryCache};
pub use config::{CacheKeyMode, Config, FieldMapping, LogFormat, LogLevel};
pub use dns::{HostResolver, StaticResolver};
pub use error_handling::ProcessingStats;
pub use fetch::GreenDataFetcher;
pub use models::{
    Co2IntensityInfo, GreenHostingInfo, GreenStatus, SupportingDocument, SustainabilityReport,
};
pub use run::{run_checks, HostReport};

// Internal run module (contains the per-host checking loop)
mod run {
    use std::sync::Arc;

    use anyhow::{bail, Context, Result};
    use log::info;

    use crate::app::{print_error_statistics, validate_and_normalize_host};
    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::fetch::GreenDataFetcher;
    use crate::initialization::{init_cache_store, init_client, init_resolver};
    use crate::models::SustainabilityReport;

    /// Report for one checked host.
    #[derive(Debug, Clone, serde::Serialize)]
    pub struct HostReport {
        /// Normalized hostname the report was built for
        pub hostname: String,
        /// Merged green hosting and CO2 intensity data
        pub report: SustainabilityReport,
    }

    /// Checks every host in `config.hostnames`, one after another.
    ///
    /// Inputs are normalized to bare hostnames first; invalid ones are skipped
    /// with a warning. Lookup failures never abort the run, they show up as
    /// empty report fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or the cache store cannot be
    /// initialized, or if none of the inputs is a valid hostname.
    pub async fn run_checks(config: Config) -> Result<Vec<HostReport>> {
        let hostnames: Vec<String> = config
            .hostnames
            .iter()
            .filter_map(|input| validate_and_normalize_host(input))
            .collect();
        if hostnames.is_empty() {
            bail!("No valid hostnames to check");
        }

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let resolver = init_resolver();
        let cache = init_cache_store(&config).context("Failed to initialize response cache")?;
        let stats = Arc::new(ProcessingStats::new());

        let fetcher = GreenDataFetcher::new(&config, client, resolver, cache, Arc::clone(&stats));

        let mut reports = Vec::with_capacity(hostnames.len());
        for hostname in hostnames {
            info!("Checking {}", hostname);
            let report = fetcher.build_report(&hostname).await;
            reports.push(HostReport { hostname, report });
        }

        if config.show_stats {
            print_error_statistics(&stats);
        }

        Ok(reports)
    }
}
