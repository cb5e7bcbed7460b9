//! Client address resolution
//!
//! Requests that do not carry an explicit address in their path publish
//! the address the connection appears to come from. When the direct peer
//! is a trusted reverse proxy, the `X-Forwarded-For` header it forwarded
//! is consulted instead; otherwise the header is ignored no matter what
//! it contains.

use std::net::Ipv4Addr;

use crate::config::Config;

/// True iff `value` is a dotted-quad IPv4 address
///
/// Accepts exactly four dot-separated decimal octets in 0-255. Rejects
/// IPv6 forms, hostnames, surrounding garbage, octets above 255, and
/// leading-zero octets (`std` parsing refuses them, same as the original
/// service's pattern).
pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// Determine the address to publish for a request without an explicit IP
///
/// The candidate starts as `peer_ip`, the host portion of the direct TCP
/// peer. If the configuration trusts that peer as a proxy and
/// `forwarded_for` is present and non-empty, the header is split on
/// commas, entries are trimmed, and the **first** syntactically valid
/// IPv4 entry (left-to-right) replaces the candidate. A header with no
/// valid entry falls back to the peer address silently.
///
/// Left-to-right selection trusts the *nearest* client-supplied hop, not
/// the right-most hop the common convention would pick. This is a
/// preserved policy of the service's historical behavior; do not "fix"
/// it without changing the published contract.
///
/// The returned string is untrusted: callers feed it back through the
/// same validity check before publishing, since the explicit-IP entry
/// path shares that code and bypasses resolution entirely.
pub fn resolve_client_ip(config: &dyn Config, peer_ip: &str, forwarded_for: Option<&str>) -> String {
    if let Some(forwarded) = forwarded_for
        && !forwarded.is_empty()
        && config.trusts_proxy(peer_ip)
        && let Some(first_valid) = forwarded
            .split(',')
            .map(str::trim)
            .find(|entry| is_ipv4(entry))
    {
        return first_valid.to_string();
    }

    peer_ip.to_string()
}
