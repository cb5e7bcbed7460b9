//! Contract: address validation runs first and gates everything
//!
//! Whichever entry variant produced the candidate address, the pipeline
//! revalidates it before touching configuration or the provider.

mod common;

use common::*;
use updns_core::Error;

#[tokio::test]
async fn invalid_address_is_rejected_before_the_provider() {
    let (service, publisher) = service_with_mock(test_config());

    let result = service
        .apply_update("good.example.com", "correct-token", "999.0.0.1")
        .await;

    assert!(matches!(result, Err(Error::InvalidAddress { .. })));
    assert_eq!(publisher.upsert_call_count(), 0);
}

#[tokio::test]
async fn invalid_address_wins_over_invalid_token() {
    // Validation order: address first, then authorization.
    let (service, publisher) = service_with_mock(test_config());

    let result = service
        .apply_update("good.example.com", "wrong-token", "not-an-ip")
        .await;

    assert!(matches!(result, Err(Error::InvalidAddress { .. })));
    assert_eq!(publisher.upsert_call_count(), 0);
}

#[tokio::test]
async fn rejected_value_is_carried_in_the_error() {
    let (service, _publisher) = service_with_mock(test_config());

    let result = service
        .apply_update("good.example.com", "correct-token", "2001:db8::7")
        .await;

    match result {
        Err(Error::InvalidAddress { value }) => assert_eq!(value, "2001:db8::7"),
        other => panic!("expected InvalidAddress, got {other:?}"),
    }
}
