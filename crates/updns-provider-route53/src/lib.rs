// # Route 53 Record Publisher
//
// This crate provides the Amazon Route 53 implementation of the
// `RecordPublisher` trait, on top of the `ChangeResourceRecordSets` API.
//
// - One UPSERT change per call, targeting a single A resource record set
// - Fixed 300-second TTL on the published record
// - Bounded operation timeout (5 seconds) on the SDK client
// - NO retry logic: a failed change is reported once, to the request
//   that attempted it, with the SDK's error text verbatim
//
// ## Credentials and region
//
// Credentials come from the ambient AWS environment (environment
// variables, shared profile, or instance role). The region is NOT
// ambient: each hostname carries its own region in the service
// configuration, so the client is constructed per call.
//
// ## API Reference
//
// - ChangeResourceRecordSets:
//   https://docs.aws.amazon.com/Route53/latest/APIReference/API_ChangeResourceRecordSets.html

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, timeout::TimeoutConfig};
use aws_sdk_route53::Client;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use std::time::Duration;
use tracing::debug;

use updns_core::{Error, RecordPublisher, RecordUpdate, Result};

/// Time-to-live for published address records, in seconds
pub const RECORD_TTL_SECS: i64 = 300;

/// Change-batch comment attached to every upsert
const CHANGE_COMMENT: &str = "updnsd update";

/// Ceiling for one Route 53 API operation, connect time included
const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Route 53 record publisher
///
/// Stateless: every call builds a client for the hostname's configured
/// region and performs a single API operation.
#[derive(Debug, Default)]
pub struct Route53Publisher;

impl Route53Publisher {
    /// Create a new Route 53 publisher
    pub fn new() -> Self {
        Self
    }

    async fn client_for_region(&self, region: &str) -> Client {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(OPERATION_TIMEOUT)
                    .build(),
            )
            .load()
            .await;

        Client::new(&sdk_config)
    }
}

/// Build the single-change UPSERT batch for `update`
///
/// The builders only fail if a required member is missing, which the
/// construction below rules out; failures are still propagated rather
/// than unwrapped.
fn change_batch(update: &RecordUpdate) -> Result<ChangeBatch> {
    let record = ResourceRecord::builder()
        .value(update.ip.to_string())
        .build()
        .map_err(|err| Error::upstream(err.to_string()))?;

    let record_set = ResourceRecordSet::builder()
        .name(&update.hostname)
        .r#type(RrType::A)
        .ttl(RECORD_TTL_SECS)
        .resource_records(record)
        .build()
        .map_err(|err| Error::upstream(err.to_string()))?;

    let change = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(record_set)
        .build()
        .map_err(|err| Error::upstream(err.to_string()))?;

    ChangeBatch::builder()
        .changes(change)
        .comment(CHANGE_COMMENT)
        .build()
        .map_err(|err| Error::upstream(err.to_string()))
}

#[async_trait]
impl RecordPublisher for Route53Publisher {
    /// Upsert the A record for `update.hostname` in its hosted zone
    ///
    /// Makes exactly one `ChangeResourceRecordSets` call. Route 53
    /// applies the UPSERT atomically, replacing any existing address
    /// record for the name.
    async fn upsert(&self, update: &RecordUpdate) -> Result<()> {
        debug!(
            hostname = %update.hostname,
            ip = %update.ip,
            zone_id = %update.zone_id,
            region = %update.region,
            "upserting A record"
        );

        let client = self.client_for_region(&update.region).await;

        client
            .change_resource_record_sets()
            .hosted_zone_id(&update.zone_id)
            .change_batch(change_batch(update)?)
            .send()
            .await
            .map_err(|err| Error::upstream(aws_sdk_route53::Error::from(err).to_string()))?;

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "route53"
    }
}
