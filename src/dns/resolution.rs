//! Hostname to IP address resolution.

use std::collections::HashMap;
use std::net::IpAddr;

use anyhow::{Error, Result};
use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

/// Forward DNS lookups (A/AAAA) for a hostname.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns every address the hostname resolves to, in resolver order.
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>>;
}

#[async_trait]
impl HostResolver for TokioAsyncResolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>> {
        let response = self.lookup_ip(host).await.map_err(Error::new)?;
        Ok(response.iter().collect())
    }
}

/// Resolver answering from a fixed host table.
///
/// Hosts missing from the table fail to resolve. IP literals resolve to
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the addresses for `host`.
    pub fn with_host(mut self, host: &str, ips: Vec<IpAddr>) -> Self {
        self.hosts.insert(host.to_ascii_lowercase(), ips);
        self
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn lookup_ips(&self, host: &str) -> Result<Vec<IpAddr>> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }
        self.hosts
            .get(&host.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| Error::msg(format!("no record found for {host}")))
    }
}

/// Resolves a hostname to its first IP address.
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IP addresses are found.
pub async fn resolve_host_to_ip(host: &str, resolver: &dyn HostResolver) -> Result<IpAddr> {
    resolver
        .lookup_ips(host)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| Error::msg("No IP addresses found"))
}
