//! Client construction parameters.
//!
//! Responsibilities:
//! - Define `ClientOptions` (server URL) and the top-level `Config`.
//! - Serialize `Config` in the Jira client keyword shape:
//!   `{"options": {"server": ...}, "basic_auth": [...]}` or `{"options": ..., "oauth": {...}}`.
//! - Provide convenience constructors for the two schemes.
//!
//! Does NOT handle:
//! - Reading settings (see `translate`).
//! - Validating the server URL (see client crate builder).

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::auth::{AuthStrategy, BasicAuth, OAuthConfig};

/// Options forwarded to the client constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Jira server URL, passed through unvalidated. `None` lets the client
    /// fall back to its own default.
    pub server: Option<String>,
}

/// Complete parameter set for constructing an authenticated client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection options
    pub options: ClientOptions,
    /// Authentication settings, flattened to `basic_auth` or `oauth`
    #[serde(flatten)]
    pub auth: AuthStrategy,
}

impl Config {
    /// Create a config using HTTP Basic credentials.
    pub fn with_basic_auth(
        server: Option<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            options: ClientOptions { server },
            auth: AuthStrategy::Basic(BasicAuth::new(username, password)),
        }
    }

    /// Create a config using an OAuth bundle.
    pub fn with_oauth(server: Option<String>, oauth: OAuthConfig) -> Self {
        Self {
            options: ClientOptions { server },
            auth: AuthStrategy::OAuth(oauth),
        }
    }

    /// Server URL, if one was configured.
    pub fn server(&self) -> Option<&str> {
        self.options.server.as_deref()
    }

    /// Render the constructor keyword arguments as JSON.
    pub fn to_kwargs(&self) -> serde_json::Value {
        // Config contains only strings, options and maps; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
