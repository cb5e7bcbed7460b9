//! The update pipeline
//!
//! [`UpdateService`] is what the HTTP surface drives. Each request flows
//! through one call:
//!
//! 1. Validate the candidate address (dotted-quad IPv4)
//! 2. Authorize the hostname/token pair against the configuration
//! 3. Hand the validated update to the [`RecordPublisher`]
//!
//! Requests are independent and stateless across calls; the first failed
//! step ends the request. There are no retries here; a provider failure
//! is surfaced once, to the request that hit it.

use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ip;
use crate::traits::{RecordPublisher, RecordUpdate};

/// Orchestrates validation, authorization, and record publication
///
/// Holds shared references to the immutable configuration and the
/// provider; cloning the `Arc`s is the only state a request touches.
pub struct UpdateService {
    config: Arc<dyn Config>,
    publisher: Arc<dyn RecordPublisher>,
}

impl UpdateService {
    /// Create a new update service
    pub fn new(config: Arc<dyn Config>, publisher: Arc<dyn RecordPublisher>) -> Self {
        Self { config, publisher }
    }

    /// Determine the address to publish for a request that carried none
    ///
    /// See [`ip::resolve_client_ip`] for the proxy-trust policy. The
    /// result is untrusted and goes back through [`Self::apply_update`].
    pub fn resolve_client_ip(&self, peer_ip: &str, forwarded_for: Option<&str>) -> String {
        ip::resolve_client_ip(self.config.as_ref(), peer_ip, forwarded_for)
    }

    /// Validate, authorize, and publish one record update
    ///
    /// Both HTTP entry variants converge here: the candidate address is
    /// revalidated whether it came from the request path or from
    /// [`Self::resolve_client_ip`].
    ///
    /// # Returns
    ///
    /// - `Ok(Ipv4Addr)`: the address that was published
    /// - `Err(Error::InvalidAddress)`: the candidate failed validation
    /// - `Err(Error::Unauthorized)`: the hostname/token pair did not match
    /// - `Err(Error::Upstream)`: the provider call failed
    pub async fn apply_update(&self, hostname: &str, token: &str, ip: &str) -> Result<Ipv4Addr> {
        let Ok(address) = ip.parse::<Ipv4Addr>() else {
            warn!(value = %ip, "received invalid ip address");
            return Err(Error::invalid_address(ip));
        };

        if !self.config.is_valid_token(hostname, token) {
            warn!(hostname = %hostname, token = %token, "received invalid hostname/token pair");
            return Err(Error::unauthorized(hostname, token));
        }

        let update = RecordUpdate {
            hostname: hostname.to_string(),
            ip: address,
            region: self.config.region(hostname).to_string(),
            zone_id: self.config.zone_id(hostname).to_string(),
        };

        self.publisher.upsert(&update).await.map_err(|err| {
            error!(
                hostname = %hostname,
                provider = self.publisher.provider_name(),
                "record update failed: {err}"
            );
            err
        })?;

        info!(hostname = %hostname, ip = %address, "updated record");
        Ok(address)
    }
}
