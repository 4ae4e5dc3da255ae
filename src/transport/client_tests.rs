//! Tests for `ReqwestClient`.
//!
//! Behaviour against a live server is covered by the executor tests through
//! a mock transport; these only exercise construction and failure mapping.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, ReqwestClient};

#[test]
fn with_timeout_builds_client() {
    let client = ReqwestClient::with_timeout(Duration::from_secs(10)).unwrap();

    assert!(format!("{client:?}").contains("ReqwestClient"));
}

#[test]
fn from_client_wraps_custom_client() {
    let custom = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap();
    let client = ReqwestClient::from_client(custom);

    assert!(format!("{client:?}").contains("ReqwestClient"));
}

#[test]
fn client_is_send_sync_and_cheap_to_clone() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<ReqwestClient>();
}

#[tokio::test]
async fn unresolvable_host_is_reported_as_connection_error() {
    let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();
    let url = url::Url::parse("http://bitpapa.invalid/api/v1/exchange_rates/all").unwrap();

    let result = client.request(HttpRequest::get(url)).await;

    // Behind a proxy the lookup failure may come back as a 5xx instead.
    match result {
        Err(HttpError::Connection(_) | HttpError::Timeout) => {}
        Ok(resp) if !resp.is_success() => {}
        other => panic!("expected a transport failure, got {other:?}"),
    }
}
