//! Error types for settings translation.
//!
//! Responsibilities:
//! - Define error variants for every translation and loading failure.
//! - Keep raw setting values out of error messages.
//!
//! Invariants:
//! - All error variants include context for debugging (prefix, setting names).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while translating settings into client parameters.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither OAuth nor Basic authentication has its minimum fields set.
    #[error(
        "No/incomplete Jira authentication settings for prefix '{prefix}'. \
         Set {prefix}_USER and {prefix}_PASSWORD, or at least one of \
         {prefix}_TOKEN, {prefix}_SECRET, {prefix}_CONSUMER, {prefix}_CERT"
    )]
    InvalidAuthConfiguration { prefix: String },

    /// The prefix is empty once trailing separators are removed.
    #[error("Invalid config prefix {0:?}: must contain at least one non-separator character")]
    InvalidPrefix(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Check if this error comes from missing or incomplete credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::InvalidAuthConfiguration { .. })
    }
}
