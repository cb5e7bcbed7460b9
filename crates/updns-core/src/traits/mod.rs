//! Core traits for the update service
//!
//! - [`RecordPublisher`]: upsert address records via a DNS provider API

pub mod record_publisher;

pub use record_publisher::{RecordPublisher, RecordUpdate};
