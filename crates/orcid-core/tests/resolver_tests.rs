//! Cache-or-fetch resolver integration tests

mod common;

use std::time::Duration;

use common::fixtures::load_response_fixture;
use common::{FakeTransport, Harness};
use orcid_core::{cache_key, HttpError, ResolveError, SourceError};

const ORCID: &str = "0000-0001-2345-6789";

#[tokio::test]
async fn test_empty_identifier_makes_no_request() {
    let harness = Harness::new(FakeTransport::ok("{}"));

    for input in ["", "   "] {
        let err = harness.resolver.resolve(input).await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidInput));
    }
    assert_eq!(harness.transport.call_count(), 0);
}

#[tokio::test]
async fn test_request_shape() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_single.json")));
    harness.resolver.resolve(ORCID).await.unwrap();

    let requests = harness.transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "https://pub.orcid.org/v3.0/0000-0001-2345-6789/works"
    );
    assert!(requests[0]
        .headers
        .contains(&("Accept".to_string(), "application/json".to_string())));
}

#[tokio::test]
async fn test_cache_hit_skips_network() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_single.json")));

    let first = harness.resolver.resolve(ORCID).await.unwrap();
    harness.advance(Duration::from_secs(60 * 60));
    let second = harness.resolver.resolve(ORCID).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
    assert_eq!(harness.transport.call_count(), 1);
    assert!(harness.resolver.cache().get(&cache_key(ORCID)).is_some());
}

#[tokio::test]
async fn test_expiry_triggers_one_refetch() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_single.json")));

    harness.resolver.resolve(ORCID).await.unwrap();
    harness.advance(Duration::from_secs(12 * 60 * 60));

    harness.resolver.resolve(ORCID).await.unwrap();
    assert_eq!(harness.transport.call_count(), 2);

    harness.resolver.resolve(ORCID).await.unwrap();
    assert_eq!(harness.transport.call_count(), 2);
}

#[tokio::test]
async fn test_refetch_after_expiry_picks_up_new_works() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_single.json")));
    assert_eq!(harness.resolver.resolve(ORCID).await.unwrap().len(), 1);

    harness
        .transport
        .respond_with(200, &load_response_fixture("works_mixed.json"));
    assert_eq!(harness.resolver.resolve(ORCID).await.unwrap().len(), 1);

    harness.advance(Duration::from_secs(12 * 60 * 60 + 1));
    assert_eq!(harness.resolver.resolve(ORCID).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_identifier_is_trimmed_for_key_and_url() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_single.json")));

    harness.resolver.resolve(" 0000-0001-2345-6789 ").await.unwrap();
    harness.resolver.resolve(ORCID).await.unwrap();

    assert_eq!(harness.transport.call_count(), 1);
    assert!(harness.transport.requests()[0].url.ends_with("/0000-0001-2345-6789/works"));
}

#[tokio::test]
async fn test_transport_failure_is_not_cached() {
    let harness = Harness::new(FakeTransport::failing(HttpError::Timeout));

    let err = harness.resolver.resolve(ORCID).await.unwrap_err();
    assert!(matches!(err, ResolveError::Fetch(HttpError::Timeout)));

    harness.resolver.resolve(ORCID).await.unwrap_err();
    assert_eq!(harness.transport.call_count(), 2);
    assert_eq!(harness.resolver.cache().live_entries(), 0);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let harness = Harness::new(FakeTransport::status(
        404,
        &load_response_fixture("works_no_group.json"),
    ));

    let err = harness.resolver.resolve(ORCID).await.unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Fetch(HttpError::Status { status: 404 })
    ));
}

#[tokio::test]
async fn test_missing_group_is_empty_result_and_not_cached() {
    let harness = Harness::new(FakeTransport::ok(&load_response_fixture("works_no_group.json")));

    let err = harness.resolver.resolve(ORCID).await.unwrap_err();
    assert!(matches!(
        err,
        ResolveError::EmptyResult(SourceError::MissingGroup)
    ));

    harness.resolver.resolve(ORCID).await.unwrap_err();
    assert_eq!(harness.transport.call_count(), 2);
}

#[tokio::test]
async fn test_unparseable_body_is_empty_result() {
    let harness = Harness::new(FakeTransport::ok("<html>Bad Gateway</html>"));

    let err = harness.resolver.resolve(ORCID).await.unwrap_err();
    assert!(matches!(err, ResolveError::EmptyResult(SourceError::Parse(_))));
    assert_eq!(harness.resolver.cache().live_entries(), 0);
}

#[tokio::test]
async fn test_zero_works_is_cached() {
    let harness = Harness::new(FakeTransport::ok(r#"{"group": []}"#));

    assert!(harness.resolver.resolve(ORCID).await.unwrap().is_empty());
    assert!(harness.resolver.resolve(ORCID).await.unwrap().is_empty());
    assert_eq!(harness.transport.call_count(), 1);
}

#[tokio::test]
async fn test_custom_ttl() {
    let harness = Harness::new(FakeTransport::ok(r#"{"group": []}"#));
    let resolver = harness.resolver.with_ttl(Duration::from_secs(60));

    resolver.resolve(ORCID).await.unwrap();
    harness.clock.advance(Duration::from_secs(61));
    resolver.resolve(ORCID).await.unwrap();

    assert_eq!(resolver.ttl(), Duration::from_secs(60));
    assert_eq!(harness.transport.call_count(), 2);
}
