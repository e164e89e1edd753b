//! Settings translation for the Jira client.
//!
//! This crate turns a flat key/value settings store into the parameters
//! needed to construct an authenticated Jira client. Settings are namespaced
//! by a prefix (`JIRA_SERVER`, `JIRA_SYSTEM_USER`, ...) so several credential
//! sets can live in one store.

pub mod constants;
mod error;
mod loader;
mod prefix;
mod settings;
mod translate;
pub mod types;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use prefix::ConfigPrefix;
pub use settings::{EnvSettings, Settings, env_var_or_none, setting_or_none};
pub use translate::{ignore_initial_connection_failure, read_config, translate};
pub use types::{AuthStrategy, BasicAuth, ClientOptions, Config, OAuthConfig};
