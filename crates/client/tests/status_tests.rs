//! Service status endpoint tests.
//!
//! This module tests the service root and the update trigger:
//! - Decoding the status document
//! - `queue_length` sent as a string
//! - Empty (204) replies

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_status() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("status/status.json");

    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let status = client.status().await.unwrap();

    assert!(status.result);
    assert!(status.is_running());
    assert_eq!(status.queue_length, 0);
    assert_eq!(status.version, "0.1");
    assert_eq!(status.children.len(), 2);
    assert!(status.last_ping_at().is_some());
}

#[tokio::test]
async fn test_trigger_update() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/update"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": true,
            "status": "updating",
            "queue_length": "3"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let status = endpoints::trigger_update(&client, &mock_server.uri())
        .await
        .unwrap();

    assert!(status.result);
    assert!(!status.is_running());
    assert_eq!(status.queue_length, 3);
}

#[tokio::test]
async fn test_update_no_content_is_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/update"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let status = client.update().await.unwrap();

    assert_eq!(status, qmk_client::ServiceStatus::default());
}
