//! DNS module tests.

use super::*;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::time::Duration;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_resolver() -> hickory_resolver::TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(2);
    opts.attempts = 1;
    opts.ndots = 0;

    hickory_resolver::TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}

#[tokio::test]
async fn test_system_resolver_ip_literal() {
    // IP literals are answered without a network query
    let resolver = create_test_resolver();
    let ip = resolve_host_to_ip("127.0.0.1", &resolver)
        .await
        .expect("IP literal should resolve");
    assert_eq!(ip, IpAddr::V4(Ipv4Addr::LOCALHOST));
}

#[tokio::test]
async fn test_static_resolver_known_host() {
    let resolver = StaticResolver::new().with_host(
        "Example.com",
        vec![
            IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)),
            IpAddr::V6(Ipv6Addr::LOCALHOST),
        ],
    );

    let ips = resolver.lookup_ips("example.com").await.unwrap();
    assert_eq!(ips.len(), 2);

    let first = resolve_host_to_ip("EXAMPLE.COM", &resolver).await.unwrap();
    assert_eq!(first, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10)));
}

#[tokio::test]
async fn test_static_resolver_unknown_host() {
    let resolver = StaticResolver::new();
    let result = resolve_host_to_ip("unknown.example", &resolver).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_static_resolver_empty_answer() {
    let resolver = StaticResolver::new().with_host("empty.example", Vec::new());
    let result = resolve_host_to_ip("empty.example", &resolver).await;
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("No IP addresses found"));
}

#[tokio::test]
async fn test_static_resolver_ip_literal() {
    let resolver = StaticResolver::new();
    let ip = resolve_host_to_ip("::1", &resolver).await.unwrap();
    assert_eq!(ip, IpAddr::V6(Ipv6Addr::LOCALHOST));
}
