//! Error types for the update service
//!
//! This module defines all error types used throughout the crate.
//!
//! The three request-path variants double as the wire protocol: their
//! `Display` strings are exactly the plain-text bodies the HTTP surface
//! returns on failure.

use thiserror::Error;

/// Result type alias for update-service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the update service
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed configuration document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors (configuration file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The supplied address is not a dotted-quad IPv4 address
    #[error("Received invalid ip address")]
    InvalidAddress {
        /// The rejected value, as received
        value: String,
    },

    /// The hostname/token pair did not authenticate
    #[error("Invalid hostname/token pair")]
    Unauthorized {
        /// Hostname from the request path
        hostname: String,
        /// Token from the request path, as supplied
        token: String,
    },

    /// The DNS provider rejected or failed the upsert
    ///
    /// Carries the provider's error text verbatim; it is surfaced
    /// unchanged in both the log and the response body.
    #[error("{0}")]
    Upstream(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-address error
    pub fn invalid_address(value: impl Into<String>) -> Self {
        Self::InvalidAddress {
            value: value.into(),
        }
    }

    /// Create an authorization error
    pub fn unauthorized(hostname: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Unauthorized {
            hostname: hostname.into(),
            token: token.into(),
        }
    }

    /// Create an upstream (provider) error
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
