// # Record Publisher Trait
//
// Defines the interface for publishing DNS address records via provider
// APIs.
//
// ## Implementations
//
// - Route 53: `updns-provider-route53` crate
//
// ## Usage
//
// ```rust,ignore
// use updns_core::{RecordPublisher, RecordUpdate};
//
// async fn publish(publisher: &dyn RecordPublisher) -> updns_core::Result<()> {
//     publisher
//         .upsert(&RecordUpdate {
//             hostname: "host.example.com".to_string(),
//             ip: [203, 0, 113, 7].into(),
//             region: "eu-west-1".to_string(),
//             zone_id: "Z3E1A2B3C4D5E6".to_string(),
//         })
//         .await
// }
// ```

use async_trait::async_trait;
use std::net::Ipv4Addr;

/// A validated record update, ready to hand to a provider
///
/// Built by the pipeline after address validation and authorization;
/// exists only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    /// Fully qualified record name
    pub hostname: String,
    /// The address to publish
    pub ip: Ipv4Addr,
    /// Provider region code configured for the hostname
    pub region: String,
    /// Provider zone identifier configured for the hostname
    pub zone_id: String,
}

/// Trait for DNS provider implementations
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// Constraints on implementations:
///
/// - One upsert call targets exactly one address resource record set,
///   replacing any existing record for the name
/// - The published record carries a bounded time-to-live
/// - No internal retry: a failure is returned once, as an opaque message
///   string, and the caller surfaces it to that request
/// - No caching and no background tasks; each call is single-shot
#[async_trait]
pub trait RecordPublisher: Send + Sync {
    /// Create or replace the address record described by `update`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the provider accepted the change
    /// - `Err(Error::Upstream)`: the provider call failed; the message is
    ///   surfaced verbatim to the requesting client
    async fn upsert(&self, update: &RecordUpdate) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
