//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions for testing the Jira client.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use jira_config::{Config, OAuthConfig};
use secrecy::SecretString;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A minimal `serverInfo` payload.
#[allow(dead_code)]
pub fn server_info_body(base_url: &str) -> serde_json::Value {
    serde_json::json!({
        "baseUrl": base_url,
        "version": "9.12.4",
        "versionNumbers": [9, 12, 4],
        "deploymentType": "Server",
        "buildNumber": 9120004,
        "serverTitle": "Test Jira"
    })
}

#[allow(dead_code)]
pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}

/// Basic credentials pointed at `server`.
#[allow(dead_code)]
pub fn basic_config(server: &str) -> Config {
    Config::with_basic_auth(Some(server.to_string()), "userA", secret("passWord"))
}

/// A complete OAuth bundle pointed at `server`.
#[allow(dead_code)]
pub fn oauth_config(server: &str) -> Config {
    Config::with_oauth(
        Some(server.to_string()),
        OAuthConfig {
            access_token: Some(secret("token")),
            access_token_secret: Some(secret("secret")),
            consumer_key: Some("consumer".to_string()),
            key_cert: Some(secret("cert")),
        },
    )
}

/// An address nothing listens on.
#[allow(dead_code)]
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:1";
