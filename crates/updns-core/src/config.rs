//! Configuration for the update service
//!
//! Configuration is a single JSON document loaded once at startup and
//! never mutated afterwards; every request-path access is a read. The
//! document maps hostnames to their credentials and provider coordinates
//! and lists the reverse proxies whose forwarded headers may be honored:
//!
//! ```json
//! {
//!   "Hostnames": {
//!     "host.example.com": {
//!       "Region": "eu-west-1",
//!       "Token": "shared-secret",
//!       "ZoneId": "Z3E1A2B3C4D5E6"
//!     }
//!   },
//!   "TrustedProxies": ["10.0.0.2"]
//! }
//! ```
//!
//! The [`Config`] trait keeps the request pipeline testable against fake
//! lookups; [`JsonConfig`] is the single production implementation.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Read-only lookups the request pipeline needs
///
/// Implementations must be cheap, side-effect-free reads; the service
/// shares one instance across all request tasks.
pub trait Config: Send + Sync {
    /// True iff `token` is non-empty and equals the token configured for
    /// `hostname`
    ///
    /// Unknown hostnames never authenticate. Empty supplied tokens never
    /// authenticate, regardless of what is configured.
    fn is_valid_token(&self, hostname: &str, token: &str) -> bool;

    /// Provider region code for `hostname`, or `""` if unknown
    fn region(&self, hostname: &str) -> &str;

    /// Provider zone identifier for `hostname`, or `""` if unknown
    fn zone_id(&self, hostname: &str) -> &str;

    /// True iff `proxy_ip` exactly matches an entry in the trusted-proxy
    /// list (case-sensitive, no normalization)
    fn trusts_proxy(&self, proxy_ip: &str) -> bool;
}

/// Per-hostname configuration record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct HostnameConfig {
    /// Provider region code (e.g. "eu-west-1")
    pub region: String,
    /// Shared-secret credential presented by the client
    pub token: String,
    /// Hosted-zone identifier the record lives in
    pub zone_id: String,
}

/// Configuration backed by the parsed JSON document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JsonConfig {
    /// Hostname to credentials/coordinates mapping
    pub hostnames: HashMap<String, HostnameConfig>,
    /// Source IPs whose forwarded-address headers are honored
    pub trusted_proxies: Vec<String>,
}

impl JsonConfig {
    /// Parse and validate a configuration document
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let config: JsonConfig = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate the configuration file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_slice(&std::fs::read(path)?)
    }

    /// Validate the configuration
    ///
    /// Every configured hostname must carry a non-empty token, region,
    /// and zone id; a record missing any of them could never complete an
    /// update and is rejected at startup instead.
    pub fn validate(&self) -> Result<()> {
        for (hostname, host) in &self.hostnames {
            if host.token.is_empty() {
                return Err(Error::config(format!(
                    "hostname '{hostname}' has an empty Token"
                )));
            }
            if host.region.is_empty() {
                return Err(Error::config(format!(
                    "hostname '{hostname}' has an empty Region"
                )));
            }
            if host.zone_id.is_empty() {
                return Err(Error::config(format!(
                    "hostname '{hostname}' has an empty ZoneId"
                )));
            }
        }
        Ok(())
    }
}

impl Config for JsonConfig {
    fn is_valid_token(&self, hostname: &str, token: &str) -> bool {
        !token.is_empty()
            && self
                .hostnames
                .get(hostname)
                .is_some_and(|host| host.token == token)
    }

    fn region(&self, hostname: &str) -> &str {
        self.hostnames
            .get(hostname)
            .map(|host| host.region.as_str())
            .unwrap_or("")
    }

    fn zone_id(&self, hostname: &str) -> &str {
        self.hostnames
            .get(hostname)
            .map(|host| host.zone_id.as_str())
            .unwrap_or("")
    }

    fn trusts_proxy(&self, proxy_ip: &str) -> bool {
        self.trusted_proxies.iter().any(|proxy| proxy == proxy_ip)
    }
}
