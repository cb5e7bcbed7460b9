//! Test doubles and common utilities for update-pipeline contract tests
//!
//! The mock publisher verifies *whether* and *with what* the pipeline
//! calls the provider boundary, without any real provider behind it.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use updns_core::{Config, Error, HostnameConfig, JsonConfig, RecordPublisher, RecordUpdate, UpdateService};

/// A mock RecordPublisher that tracks calls
pub struct MockPublisher {
    /// Call counter for upsert()
    upsert_call_count: AtomicUsize,
    /// Recorded updates from upsert calls
    upserts: Mutex<Vec<RecordUpdate>>,
    /// When set, every upsert fails with this message
    fail_with: Option<String>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self {
            upsert_call_count: AtomicUsize::new(0),
            upserts: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Create a publisher whose every upsert fails with `message`
    pub fn failing_with(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new()
        }
    }

    /// Get the number of times upsert() was called
    pub fn upsert_call_count(&self) -> usize {
        self.upsert_call_count.load(Ordering::SeqCst)
    }

    /// Get the updates that were handed to the provider
    pub fn upserts(&self) -> Vec<RecordUpdate> {
        self.upserts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RecordPublisher for MockPublisher {
    async fn upsert(&self, update: &RecordUpdate) -> Result<(), Error> {
        self.upsert_call_count.fetch_add(1, Ordering::SeqCst);
        self.upserts.lock().unwrap().push(update.clone());

        match &self.fail_with {
            Some(message) => Err(Error::upstream(message.clone())),
            None => Ok(()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Configuration with one known hostname and one trusted proxy
pub fn test_config() -> JsonConfig {
    let mut config = JsonConfig::default();
    config.hostnames.insert(
        "good.example.com".to_string(),
        HostnameConfig {
            region: "eu-west-1".to_string(),
            token: "correct-token".to_string(),
            zone_id: "Z3E1A2B3C4D5E6".to_string(),
        },
    );
    config.trusted_proxies.push("10.0.0.2".to_string());
    config
}

/// Build a service over `config` and a fresh mock publisher
pub fn service_with_mock(config: impl Config + 'static) -> (UpdateService, Arc<MockPublisher>) {
    let publisher = Arc::new(MockPublisher::new());
    let service = UpdateService::new(Arc::new(config), publisher.clone());
    (service, publisher)
}
