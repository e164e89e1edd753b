//! Error types for the Jira client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Jira client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached (DNS, refused connection, TLS handshake).
    #[error("Connection to {url} failed: {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Jira.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Jira.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Map a transport error, separating connectivity failures from the rest.
    pub(crate) fn from_transport(err: reqwest::Error, url: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else if err.is_connect() {
            Self::ConnectionFailed {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::HttpError(err)
        }
    }

    /// Check if this error means the server was unreachable.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
            || matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }
}
