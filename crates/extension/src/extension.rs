//! Binding a Jira client to a host application.
//!
//! Responsibilities:
//! - Translate the application's prefixed settings into client parameters.
//! - Build the client and probe the server once.
//! - Honor `{PREFIX}_IGNORE_INITIAL_CONNECTION_FAILURE`.
//! - Register the client in the application's registry.
//!
//! Does NOT handle:
//! - Retrying the probe; a swallowed failure leaves an unconnected client.
//!
//! Invariants:
//! - A prefix already present in the registry is rejected before any settings
//!   are read.
//! - Session teardown is enabled on the client before `init_app` returns.
//! - Only connectivity failures can be swallowed; auth and API errors always
//!   propagate.
//! - Nothing is registered unless `init_app` returns `Ok`.

use std::sync::Arc;

use jira_client::JiraClient;
use jira_config::{ConfigPrefix, ignore_initial_connection_failure, read_config};
use tracing::{debug, error, info};

use crate::app::AppContext;
use crate::error::{ExtensionError, Result};
use crate::registry::ExtensionState;

/// Jira binding for one settings prefix.
///
/// # Example
///
/// ```rust,ignore
/// let mut app = AppContext::new("reporting", EnvSettings);
/// let jira = JiraExtension::new(Some("JIRA_SYSTEM"))?;
/// let client = jira.init_app(&mut app).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JiraExtension {
    prefix: ConfigPrefix,
}

impl JiraExtension {
    /// Create a binding for `prefix`, or `JIRA` when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::Config`] for a separator-only prefix.
    pub fn new(prefix: Option<&str>) -> Result<Self> {
        Ok(Self {
            prefix: ConfigPrefix::resolve(prefix)?,
        })
    }

    /// Create a binding and initialize it against `app` immediately.
    pub async fn with_app(app: &mut AppContext, prefix: Option<&str>) -> Result<Self> {
        let extension = Self::new(prefix)?;
        extension.init_app(app).await?;
        Ok(extension)
    }

    pub fn prefix(&self) -> &ConfigPrefix {
        &self.prefix
    }

    /// The client this binding registered in `app`, if any.
    pub fn client(&self, app: &AppContext) -> Option<Arc<JiraClient>> {
        app.extensions()
            .get(&self.prefix)
            .map(|state| Arc::clone(&state.client))
    }

    /// Build, probe and register a client for this binding's prefix.
    ///
    /// # Errors
    ///
    /// - [`ExtensionError::DuplicateRegistration`] if the prefix is already registered.
    /// - [`ExtensionError::Config`] if the settings hold no usable credentials.
    /// - [`ExtensionError::Client`] if the client cannot be built, or the probe
    ///   fails and the failure is not ignored.
    pub async fn init_app(&self, app: &mut AppContext) -> Result<Arc<JiraClient>> {
        let prefix = &self.prefix;
        if app.extensions().contains(prefix) {
            return Err(ExtensionError::DuplicateRegistration {
                prefix: prefix.registry_key(),
            });
        }

        let config = read_config(app.settings(), prefix)?;
        let ignore_failure = ignore_initial_connection_failure(app.settings(), prefix)?;

        let client = JiraClient::builder().from_config(&config).build()?;
        let probe = client.connect().await;
        client.enable_teardown();

        match probe {
            Ok(server_info) => {
                info!(
                    prefix = %prefix,
                    server = %client.server(),
                    version = %server_info.version,
                    "Jira client initialized"
                );
            }
            Err(err) if ignore_failure && err.is_connectivity() => {
                error!(
                    prefix = %prefix,
                    server = %client.server(),
                    error = %err,
                    "Initial connection to Jira failed; continuing because ignore_initial_connection_failure is set"
                );
            }
            Err(err) => return Err(err.into()),
        }

        let client = Arc::new(client);
        let app_name = app.name().to_string();
        app.extensions_mut().register(ExtensionState::new(
            prefix.clone(),
            app_name,
            Arc::clone(&client),
        ))?;
        debug!(prefix = %prefix, app = %app.name(), "Registered Jira extension");

        Ok(client)
    }
}
