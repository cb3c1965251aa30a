//! DNS resolution.
//!
//! Forward lookups go through the [`HostResolver`] trait so the system
//! resolver (`hickory-resolver`) can be swapped for a fixed host table.

mod resolution;

// Re-export public API
pub use resolution::{resolve_host_to_ip, HostResolver, StaticResolver};

#[cfg(test)]
mod tests;
