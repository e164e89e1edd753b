//! Builder for loading client parameters from the process environment.
//!
//! Responsibilities:
//! - Hold the prefix that selects which settings to read.
//! - Optionally populate the environment from a `.env` file.
//! - Translate the environment (or any other [`Settings`]) into a [`Config`].
//!
//! Does NOT handle:
//! - The translation rules themselves (see `translate.rs`).
//!
//! Invariants:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Variables already present in the environment win over `.env` entries.

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigError;
use crate::prefix::ConfigPrefix;
use crate::settings::{EnvSettings, Settings};
use crate::translate::{ignore_initial_connection_failure, read_config};
use crate::types::Config;

/// Configuration loader that builds client parameters for one prefix.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    prefix: ConfigPrefix,
}

impl ConfigLoader {
    /// Create a loader for the default `JIRA` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `prefix` (normalized) instead of `JIRA`.
    pub fn with_prefix(mut self, prefix: &str) -> Result<Self, ConfigError> {
        self.prefix = ConfigPrefix::new(prefix)?;
        Ok(self)
    }

    /// The normalized prefix this loader reads.
    pub fn prefix(&self) -> &ConfigPrefix {
        &self.prefix
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Translate the process environment.
    pub fn build(&self) -> Result<Config, ConfigError> {
        self.build_from(&EnvSettings)
    }

    /// Translate an arbitrary settings source.
    pub fn build_from<S: Settings + ?Sized>(&self, settings: &S) -> Result<Config, ConfigError> {
        read_config(settings, &self.prefix)
    }

    /// Read the initial-connection-failure escape hatch from `settings`.
    pub fn ignore_initial_connection_failure<S: Settings + ?Sized>(
        &self,
        settings: &S,
    ) -> Result<bool, ConfigError> {
        ignore_initial_connection_failure(settings, &self.prefix)
    }
}
