//! Error types for the extension binding.

use jira_client::ClientError;
use jira_config::ConfigError;
use thiserror::Error;

/// Result type alias for extension operations.
pub type Result<T> = std::result::Result<T, ExtensionError>;

/// Errors raised while binding a Jira client to an application.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// A client is already registered under this prefix.
    #[error("A Jira extension is already registered for prefix '{prefix}'")]
    DuplicateRegistration { prefix: String },

    /// Settings could not be translated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The client could not be built or could not reach the server.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ExtensionError {
    /// Check if this error means the server was unreachable.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Client(err) if err.is_connectivity())
    }
}
