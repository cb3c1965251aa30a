//! Hostname input validation and normalization.

use log::warn;
use url::{Host, Url};

use crate::config::MAX_HOST_INPUT_LENGTH;

/// Validates a hostname or URL given on the command line and returns the bare host.
///
/// Input without a scheme gets `https://` prepended, then it must parse as an
/// http/https URL with a host. Paths, ports and credentials are dropped and the
/// host is lowercased. IPv6 literals are returned without brackets.
///
/// Logs a warning and returns `None` for empty, overlong or invalid input.
pub fn validate_and_normalize_host(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.len() > MAX_HOST_INPUT_LENGTH {
        warn!(
            "Skipping host exceeding maximum length ({} > {}): {}...",
            input.len(),
            MAX_HOST_INPUT_LENGTH,
            input.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    let parsed = match Url::parse(&normalized) {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!("Skipping invalid host: {input}");
            return None;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        warn!("Skipping unsupported scheme for host: {input}");
        return None;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => {
            Some(domain.trim_end_matches('.').to_lowercase())
        }
        Some(Host::Ipv4(ip)) => Some(ip.to_string()),
        Some(Host::Ipv6(ip)) => Some(ip.to_string()),
        _ => {
            warn!("Skipping input without a host: {input}");
            None
        }
    }
}
