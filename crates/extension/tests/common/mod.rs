//! Shared helpers for extension integration tests.

use std::collections::HashMap;

use jira_extension::AppContext;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// An address nothing listens on.
#[allow(dead_code)]
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:1";

pub fn settings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn app(pairs: &[(&str, &str)]) -> AppContext {
    AppContext::new("test-app", settings(pairs))
}

/// Mount a `serverInfo` responder returning `status`.
#[allow(dead_code)]
pub async fn mount_server_info(mock_server: &MockServer, status: u16) {
    use wiremock::matchers::{method, path};

    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "baseUrl": mock_server.uri(),
            "version": "9.12.4",
            "versionNumbers": [9, 12, 4],
            "deploymentType": "Server",
            "buildNumber": 9120004,
            "serverTitle": "Test Jira"
        }))
    } else {
        ResponseTemplate::new(status)
    };

    Mock::given(method("GET"))
        .and(path("/rest/api/2/serverInfo"))
        .respond_with(template)
        .mount(mock_server)
        .await;
}
