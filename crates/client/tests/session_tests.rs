//! Session teardown tests.
//!
//! This module tests the two-phase construction contract:
//! - Teardown is suppressed after `build()` and on a failed `connect()`
//! - After `enable_teardown()`, `kill_session()` reaches the server
//!
//! # Invariants
//! - No DELETE request reaches the server while teardown is suppressed

mod common;

use common::*;
use jira_client::{JiraClient, TeardownMode};
use wiremock::matchers::{method, path};

async fn mount_session_delete(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("DELETE"))
        .and(path("/rest/auth/1/session"))
        .respond_with(ResponseTemplate::new(204))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_kill_session_is_noop_while_suppressed() {
    let mock_server = MockServer::start().await;
    mount_session_delete(&mock_server, 0).await;

    let client = JiraClient::builder()
        .from_config(&basic_config(&mock_server.uri()))
        .build()
        .unwrap();

    assert_eq!(client.teardown_mode(), TeardownMode::Suppressed);
    client.kill_session().await.expect("suppressed teardown is a no-op");
}

#[tokio::test]
async fn test_failed_connect_does_not_tear_down_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    mount_session_delete(&mock_server, 0).await;

    let client = JiraClient::builder()
        .from_config(&basic_config(&mock_server.uri()))
        .build()
        .unwrap();

    assert!(client.connect().await.is_err());
    assert_eq!(client.teardown_mode(), TeardownMode::Suppressed);
}

#[tokio::test]
async fn test_kill_session_after_enable_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(server_info_body(&mock_server.uri())))
        .mount(&mock_server)
        .await;
    mount_session_delete(&mock_server, 1).await;

    let client = JiraClient::builder()
        .from_config(&basic_config(&mock_server.uri()))
        .build()
        .unwrap();
    client.connect().await.unwrap();
    client.enable_teardown();

    client.kill_session().await.expect("teardown should succeed");
}

#[tokio::test]
async fn test_enabled_kill_session_without_server_session_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/auth/1/session"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = JiraClient::builder()
        .from_config(&basic_config(&mock_server.uri()))
        .build()
        .unwrap();
    client.enable_teardown();

    let err = client.kill_session().await.unwrap_err();
    assert!(err.is_auth_error());
}
