//! Authentication headers and session teardown state.
//!
//! Responsibilities:
//! - Attach Basic or OAuth credentials to outgoing requests.
//! - Track whether session teardown is suppressed (during construction) or enabled.
//!
//! Does NOT handle:
//! - RSA-SHA1 request signing with `key_cert`; OAuth requests use the
//!   PLAINTEXT signature method.
//!
//! Invariants:
//! - A new `SessionManager` starts with teardown suppressed.
//! - Once enabled, teardown stays enabled for the lifetime of the manager.
//! - Secrets are only exposed when building the outgoing header.

use std::sync::atomic::{AtomicBool, Ordering};

use jira_config::{AuthStrategy, OAuthConfig};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use secrecy::ExposeSecret;

/// RFC 5849 unreserved characters are left as-is; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Whether the client may tear down its server session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeardownMode {
    /// Construction in progress; teardown requests are no-ops.
    Suppressed,
    /// Normal teardown semantics.
    Enabled,
}

/// Holds the credentials and the teardown switch for one client.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    teardown_enabled: AtomicBool,
}

impl SessionManager {
    /// Create a session manager with teardown suppressed.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            teardown_enabled: AtomicBool::new(false),
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    pub fn teardown_mode(&self) -> TeardownMode {
        if self.teardown_enabled.load(Ordering::Acquire) {
            TeardownMode::Enabled
        } else {
            TeardownMode::Suppressed
        }
    }

    /// Switch to normal teardown semantics.
    pub fn enable_teardown(&self) {
        self.teardown_enabled.store(true, Ordering::Release);
    }

    /// Attach credentials to `builder`.
    pub(crate) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.auth_strategy {
            AuthStrategy::Basic(basic) => {
                builder.basic_auth(&basic.username, Some(basic.password.expose_secret()))
            }
            AuthStrategy::OAuth(oauth) => {
                let nonce = uuid::Uuid::new_v4().simple().to_string();
                let timestamp = chrono::Utc::now().timestamp();
                builder.header(AUTHORIZATION, oauth_header(oauth, &nonce, timestamp))
            }
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Build an OAuth 1.0 `Authorization` header value.
///
/// Unset fields are omitted. The PLAINTEXT signature is
/// `encode(consumer_secret) & encode(token_secret)` with an empty consumer secret.
pub(crate) fn oauth_header(oauth: &OAuthConfig, nonce: &str, timestamp: i64) -> String {
    let token_secret = oauth
        .access_token_secret
        .as_ref()
        .map(|s| encode(s.expose_secret()))
        .unwrap_or_default();
    let signature = format!("&{}", token_secret);

    let mut params: Vec<(&str, String)> = Vec::with_capacity(7);
    if let Some(consumer_key) = &oauth.consumer_key {
        params.push(("oauth_consumer_key", consumer_key.clone()));
    }
    if let Some(token) = &oauth.access_token {
        params.push(("oauth_token", token.expose_secret().to_string()));
    }
    params.push(("oauth_signature_method", "PLAINTEXT".to_string()));
    params.push(("oauth_timestamp", timestamp.to_string()));
    params.push(("oauth_nonce", nonce.to_string()));
    params.push(("oauth_version", "1.0".to_string()));
    params.push(("oauth_signature", signature));

    let rendered: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, encode(value)))
        .collect();
    format!("OAuth {}", rendered.join(", "))
}
