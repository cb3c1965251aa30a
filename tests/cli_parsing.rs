//! Tests for command-line parsing of `Config`.

use clap::Parser;
use green_status::{CacheKeyMode, Config, FieldMapping, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_defaults_with_single_host() {
    let config = Config::try_parse_from(["green_status", "example.com"]).unwrap();

    assert_eq!(config.hostnames, vec!["example.com".to_string()]);
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert_eq!(config.timeout_seconds, 3);
    assert_eq!(config.cache_dir, PathBuf::from(".green_status_cache"));
    assert_eq!(config.cache_ttl_secs, 86_400);
    assert_eq!(config.cache_keys, CacheKeyMode::PerHost);
    assert_eq!(config.field_mapping, FieldMapping::Legacy);
    assert!(!config.memory_cache);
    assert!(!config.insecure);
    assert!(!config.show_stats);
    assert!(config.api_base_url.starts_with("https://"));
}

#[test]
fn test_all_options() {
    let config = Config::try_parse_from([
        "green_status",
        "a.example",
        "https://b.example/page",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--timeout-seconds",
        "10",
        "--user-agent",
        "probe/1.0",
        "--api-base-url",
        "http://127.0.0.1:9000",
        "--cache-dir",
        "/tmp/gs-cache",
        "--memory-cache",
        "--cache-ttl-secs",
        "60",
        "--cache-keys",
        "global",
        "--field-mapping",
        "corrected",
        "--insecure",
        "--show-stats",
    ])
    .unwrap();

    assert_eq!(config.hostnames.len(), 2);
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.timeout_seconds, 10);
    assert_eq!(config.user_agent, "probe/1.0");
    assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.cache_dir, PathBuf::from("/tmp/gs-cache"));
    assert!(config.memory_cache);
    assert_eq!(config.cache_ttl_secs, 60);
    assert_eq!(config.cache_keys, CacheKeyMode::Global);
    assert_eq!(config.field_mapping, FieldMapping::Corrected);
    assert!(config.insecure);
    assert!(config.show_stats);
}

#[test]
fn test_hostname_is_required() {
    assert!(Config::try_parse_from(["green_status"]).is_err());
}

#[test]
fn test_invalid_enum_values_rejected() {
    assert!(Config::try_parse_from(["green_status", "x.example", "--cache-keys", "shared"]).is_err());
    assert!(
        Config::try_parse_from(["green_status", "x.example", "--field-mapping", "fixed"]).is_err()
    );
    assert!(Config::try_parse_from(["green_status", "x.example", "--log-level", "loud"]).is_err());
}

#[test]
fn test_non_numeric_timeout_rejected() {
    assert!(
        Config::try_parse_from(["green_status", "x.example", "--timeout-seconds", "soon"]).is_err()
    );
}
