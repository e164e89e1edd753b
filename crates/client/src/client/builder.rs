//! Client builder for constructing [`JiraClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Converting translated settings ([`Config`]) into client options
//! - Normalizing and validating the server URL
//! - Configuring the underlying HTTP client (timeout, redirect limit)
//!
//! # What this module does NOT handle:
//! - Reaching the server (see [`JiraClient::connect`])
//!
//! # Invariants
//! - `auth_strategy` is required; `server` falls back to [`DEFAULT_SERVER`]
//! - The server URL is always normalized to have no trailing slashes
//! - A freshly built client has session teardown suppressed

use std::sync::OnceLock;
use std::time::Duration;

use jira_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_SERVER, DEFAULT_TIMEOUT_SECS};
use jira_config::{AuthStrategy, Config};

use crate::auth::SessionManager;
use crate::client::JiraClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`JiraClient`].
///
/// # Example
///
/// ```rust,ignore
/// use jira_client::JiraClient;
///
/// let config = jira_config::translate(&settings, "JIRA")?;
/// let client = JiraClient::builder().from_config(&config).build()?;
/// client.connect().await?;
/// client.enable_teardown();
/// ```
#[derive(Default)]
pub struct JiraClientBuilder {
    server: Option<String>,
    auth_strategy: Option<AuthStrategy>,
}

impl JiraClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Jira server URL, e.g. `https://jira.example.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn server(mut self, url: impl Into<String>) -> Self {
        self.server = Some(url.into());
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Take server and credentials from translated settings.
    ///
    /// A `None` server leaves any previously set server untouched.
    pub fn from_config(mut self, config: &Config) -> Self {
        if let Some(server) = &config.options.server {
            self.server = Some(server.clone());
        }
        self.auth_strategy = Some(config.auth.clone());
        self
    }

    /// Normalize a server URL by removing trailing slashes.
    ///
    /// - `"https://jira.example.com/"` -> `"https://jira.example.com"`
    /// - `"http://localhost:2990/jira//"` -> `"http://localhost:2990/jira"`
    fn normalize_server(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`JiraClient`] with teardown suppressed.
    ///
    /// No network I/O happens here; call [`JiraClient::connect`] next.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the server is not an absolute http(s) URL.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<JiraClient> {
        let server = Self::normalize_server(self.server.as_deref().unwrap_or(DEFAULT_SERVER));
        let parsed = url::Url::parse(&server)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", server, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                server
            )));
        }

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        Ok(JiraClient {
            http,
            server,
            session_manager: SessionManager::new(auth_strategy),
            timeout,
            server_info: OnceLock::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TeardownMode;
    use jira_config::{BasicAuth, OAuthConfig};
    use secrecy::SecretString;

    fn basic_config(server: Option<&str>) -> Config {
        Config::with_basic_auth(
            server.map(str::to_string),
            "admin",
            SecretString::new("test-password".to_string().into()),
        )
    }

    #[test]
    fn test_from_config_with_basic_auth() {
        let client = JiraClient::builder()
            .from_config(&basic_config(Some("https://jira.example.com")))
            .build()
            .unwrap();

        assert_eq!(client.server(), "https://jira.example.com");
        assert!(matches!(client.auth_strategy(), AuthStrategy::Basic(_)));
        assert_eq!(client.teardown_mode(), TeardownMode::Suppressed);
    }

    #[test]
    fn test_from_config_with_oauth() {
        let config = Config::with_oauth(
            Some("https://jira.example.com".to_string()),
            OAuthConfig {
                consumer_key: Some("consumer".to_string()),
                ..Default::default()
            },
        );

        let client = JiraClient::builder().from_config(&config).build().unwrap();

        assert!(client.auth_strategy().is_oauth());
    }

    #[test]
    fn test_missing_server_uses_default() {
        let client = JiraClient::builder()
            .from_config(&basic_config(None))
            .build()
            .unwrap();

        assert_eq!(client.server(), DEFAULT_SERVER);
    }

    #[test]
    fn test_missing_auth_is_rejected() {
        let result = JiraClient::builder().server("https://jira.example.com").build();
        assert!(matches!(result, Err(ClientError::AuthFailed(_))));
    }

    #[test]
    fn test_invalid_server_is_rejected() {
        let result = JiraClient::builder()
            .from_config(&basic_config(Some("127.0.0.1")))
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));

        let result = JiraClient::builder()
            .from_config(&basic_config(Some("ftp://jira.example.com")))
            .build();
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_normalize_server_trailing_slashes() {
        assert_eq!(
            JiraClientBuilder::normalize_server("https://jira.example.com/"),
            "https://jira.example.com"
        );
        assert_eq!(
            JiraClientBuilder::normalize_server("http://localhost:2990/jira//"),
            "http://localhost:2990/jira"
        );
    }

    #[test]
    fn test_explicit_server_is_normalized() {
        let client = JiraClient::builder()
            .server("http://jira.example.com/")
            .auth_strategy(AuthStrategy::Basic(BasicAuth::new(
                "admin",
                SecretString::new("pw".to_string().into()),
            )))
            .build()
            .unwrap();

        assert_eq!(client.server(), "http://jira.example.com");
    }
}
