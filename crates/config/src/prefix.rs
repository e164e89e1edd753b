//! Settings-key namespace handling.
//!
//! Responsibilities:
//! - Normalize caller-supplied prefixes (strip trailing `_`, upper-case).
//! - Build `{PREFIX}_{SUFFIX}` setting keys.
//! - Provide the lower-cased registry key used for duplicate detection.
//!
//! Invariants:
//! - A `ConfigPrefix` is never empty and never ends with the separator.
//! - Two prefixes that differ only by case or trailing separators are equal.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_PREFIX, PREFIX_SEPARATOR};
use crate::error::ConfigError;

/// Normalized namespace for one set of Jira settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPrefix(String);

impl ConfigPrefix {
    /// Normalize `raw` into a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPrefix`] when nothing is left after
    /// removing trailing separators. Whitespace is part of the prefix.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let normalized = raw.trim_end_matches(PREFIX_SEPARATOR).to_uppercase();
        if normalized.is_empty() {
            return Err(ConfigError::InvalidPrefix(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Resolve an optional prefix, falling back to `JIRA` when `None` or empty.
    pub fn resolve(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw {
            Some(raw) if !raw.is_empty() => Self::new(raw),
            _ => Ok(Self::default()),
        }
    }

    /// The normalized, upper-case prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the full setting key for `suffix`, e.g. `JIRA_SERVER`.
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}{}", self.0, PREFIX_SEPARATOR, suffix)
    }

    /// Lower-cased form used as the extension registry key.
    pub fn registry_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Default for ConfigPrefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl fmt::Display for ConfigPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ConfigPrefix {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ConfigPrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
