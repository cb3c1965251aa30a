//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `green_status` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output of the reports
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use green_status::initialization::init_logger_with;
use green_status::{run_checks, Config, HostReport};

/// Renders reports as one JSON object keyed by hostname.
fn render_reports(reports: &[HostReport]) -> Result<String> {
    let mut output = serde_json::Map::new();
    for host in reports {
        output.insert(
            host.hostname.clone(),
            serde_json::to_value(&host.report).context("Failed to serialize report")?,
        );
    }
    serde_json::to_string_pretty(&output).context("Failed to serialize reports")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load GREEN_STATUS_* settings from a .env file if present:
    // current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let reports = match run_checks(config).await {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("green_status error: {:#}", e);
            process::exit(1);
        }
    };

    match render_reports(&reports) {
        Ok(json) => {
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("green_status error: {:#}", e);
            process::exit(1);
        }
    }
}
