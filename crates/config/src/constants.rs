//! Centralized constants for the Jira adapter workspace.
//!
//! This module contains setting names and default values used across crates
//! to avoid string duplication between the translator, the client and the
//! extension binding.

// =============================================================================
// Prefix & Setting Names
// =============================================================================

/// Prefix used when the caller does not supply one.
pub const DEFAULT_PREFIX: &str = "JIRA";

/// Separator between the prefix and the setting suffix (`JIRA_SERVER`).
pub const PREFIX_SEPARATOR: char = '_';

/// Suffix of the server URL setting.
pub const SERVER_SUFFIX: &str = "SERVER";

/// Suffix of the HTTP Basic user name setting.
pub const USER_SUFFIX: &str = "USER";

/// Suffix of the HTTP Basic password setting.
pub const PASSWORD_SUFFIX: &str = "PASSWORD";

/// Suffix of the OAuth access token setting.
pub const TOKEN_SUFFIX: &str = "TOKEN";

/// Suffix of the OAuth access token secret setting.
pub const SECRET_SUFFIX: &str = "SECRET";

/// Suffix of the OAuth consumer key setting.
pub const CONSUMER_SUFFIX: &str = "CONSUMER";

/// Suffix of the OAuth key certificate setting.
pub const CERT_SUFFIX: &str = "CERT";

/// The seven settings read by the translator, in lookup order.
pub const FIELD_SUFFIXES: [&str; 7] = [
    SERVER_SUFFIX,
    USER_SUFFIX,
    PASSWORD_SUFFIX,
    TOKEN_SUFFIX,
    SECRET_SUFFIX,
    CONSUMER_SUFFIX,
    CERT_SUFFIX,
];

/// Suffix of the development escape hatch that swallows an initial
/// connectivity failure during extension initialization.
pub const IGNORE_INITIAL_CONNECTION_FAILURE_SUFFIX: &str = "IGNORE_INITIAL_CONNECTION_FAILURE";

/// Environment variable that disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Client Defaults
// =============================================================================

/// Server used when `{PREFIX}_SERVER` is unset (Jira SDK development server).
pub const DEFAULT_SERVER: &str = "http://localhost:2990/jira";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
