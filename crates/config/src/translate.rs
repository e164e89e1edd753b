//! Translation from a flat settings store into client parameters.
//!
//! Responsibilities:
//! - Read the seven `{PREFIX}_{SUFFIX}` settings for one prefix.
//! - Classify the credentials into OAuth or HTTP Basic.
//! - Read the initial-connection-failure escape hatch.
//!
//! Does NOT handle:
//! - Validating the server URL (the client does that at build time).
//! - Completing a partial OAuth bundle; missing fields pass through as `None`.
//!
//! Invariants:
//! - OAuth is selected whenever any OAuth field is set, even if USER and
//!   PASSWORD are also set.
//! - Basic is selected only when both USER and PASSWORD are set.
//! - Keys under other prefixes are never read.
//! - Pure: no state is kept between calls.

use secrecy::SecretString;
use tracing::{debug, warn};

use crate::constants::{FIELD_SUFFIXES, IGNORE_INITIAL_CONNECTION_FAILURE_SUFFIX};
use crate::error::ConfigError;
use crate::prefix::ConfigPrefix;
use crate::settings::{Settings, setting_or_none};
use crate::types::{AuthStrategy, BasicAuth, ClientOptions, Config, OAuthConfig};

/// Translate `settings` into client parameters for `prefix`.
///
/// The prefix is normalized first (trailing `_` removed, upper-cased).
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPrefix`] for a separator-only prefix and
/// [`ConfigError::InvalidAuthConfiguration`] when neither scheme is usable.
pub fn translate<S: Settings + ?Sized>(settings: &S, prefix: &str) -> Result<Config, ConfigError> {
    let prefix = ConfigPrefix::new(prefix)?;
    read_config(settings, &prefix)
}

/// Translate `settings` for an already normalized prefix.
pub fn read_config<S: Settings + ?Sized>(
    settings: &S,
    prefix: &ConfigPrefix,
) -> Result<Config, ConfigError> {
    let [server, user, password, token, secret, consumer, cert] =
        FIELD_SUFFIXES.map(|suffix| setting_or_none(settings, &prefix.key(suffix)));

    let oauth = OAuthConfig {
        access_token: token.map(into_secret),
        access_token_secret: secret.map(into_secret),
        consumer_key: consumer,
        key_cert: cert.map(into_secret),
    };

    let auth = if oauth.has_any() {
        if !oauth.is_complete() {
            warn!(
                prefix = %prefix,
                missing = ?oauth.missing_fields(),
                "OAuth settings are incomplete; passing them to the client as-is"
            );
        }
        AuthStrategy::OAuth(oauth)
    } else if let (Some(user), Some(password)) = (user, password) {
        AuthStrategy::Basic(BasicAuth::new(user, into_secret(password)))
    } else {
        return Err(ConfigError::InvalidAuthConfiguration {
            prefix: prefix.to_string(),
        });
    };

    debug!(
        prefix = %prefix,
        scheme = auth.scheme(),
        has_server = server.is_some(),
        "Translated Jira settings"
    );

    Ok(Config {
        options: ClientOptions { server },
        auth,
    })
}

/// Read `{PREFIX}_IGNORE_INITIAL_CONNECTION_FAILURE`.
///
/// Unset means `false`. Accepts `true/false`, `1/0`, `yes/no` and `on/off`,
/// case-insensitively.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for any other value.
pub fn ignore_initial_connection_failure<S: Settings + ?Sized>(
    settings: &S,
    prefix: &ConfigPrefix,
) -> Result<bool, ConfigError> {
    let var = prefix.key(IGNORE_INITIAL_CONNECTION_FAILURE_SUFFIX);
    match setting_or_none(settings, &var) {
        None => Ok(false),
        Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidValue {
            var,
            message: "must be true or false".to_string(),
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn into_secret(value: String) -> SecretString {
    SecretString::new(value.into())
}
