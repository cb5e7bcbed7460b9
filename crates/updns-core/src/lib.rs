// # updns-core
//
// Core library for the UpDNS dynamic-DNS update service.
//
// ## Architecture Overview
//
// An authenticated client calls the HTTP surface to publish its current
// address; this crate holds everything between the wire and the provider:
//
// - **Config**: read-only per-hostname credentials, regions, zone ids,
//   and the trusted-proxy allowlist
// - **ip**: client address resolution for proxied requests
// - **UpdateService**: the request pipeline (validate, authorize, publish)
// - **RecordPublisher**: trait for upserting address records via a DNS
//   provider API
//
// ## Design Principles
//
// 1. **Separation of Concerns**: the pipeline is separate from transport
//    and from provider implementations
// 2. **Immutable Configuration**: loaded once at startup, shared by
//    reference, never written during request handling
// 3. **Library-First**: the HTTP surface (`updns-api`) and the Route 53
//    implementation (`updns-provider-route53`) are thin layers over the
//    traits defined here

pub mod config;
pub mod error;
pub mod ip;
pub mod service;
pub mod traits;

// Re-export core types for convenience
pub use config::{Config, HostnameConfig, JsonConfig};
pub use error::{Error, Result};
pub use service::UpdateService;
pub use traits::{RecordPublisher, RecordUpdate};
