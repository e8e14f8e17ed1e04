//! Target resolution.
//!
//! Resolves the target hostname or IP literal exactly once per scan.
//! Probing is IPv4-only, so resolution is pinned to the A-record
//! family; IP literals short-circuit DNS entirely.

use crate::error::{ScanError, ScanResult};
use crate::types::ScanTarget;
use std::net::IpAddr;
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Resolve a hostname or IPv4 literal to a scan target.
///
/// Failure here is the one condition that aborts a scan before any
/// port is probed; callers get zero outcomes and an explicit error.
pub async fn resolve(target: &str) -> ScanResult<ScanTarget> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        return match ip {
            IpAddr::V4(v4) => Ok(ScanTarget::new(target, v4)),
            IpAddr::V6(_) => Err(ScanError::Resolution {
                target: target.to_string(),
                reason: "IPv6 targets are not supported".to_string(),
            }),
        };
    }

    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

    let response = resolver
        .ipv4_lookup(target)
        .await
        .map_err(|e| ScanError::Resolution {
            target: target.to_string(),
            reason: e.to_string(),
        })?;

    let ip = response
        .iter()
        .next()
        .map(|record| record.0)
        .ok_or_else(|| ScanError::NoAddresses(target.to_string()))?;

    tracing::debug!(%target, %ip, "resolved target");
    Ok(ScanTarget::new(target, ip))
}
