//! Per-application registry of initialized Jira clients.
//!
//! Responsibilities:
//! - Hold one [`ExtensionState`] per config prefix.
//! - Reject a second registration under the same prefix.
//!
//! Invariants:
//! - Entries are keyed by the lower-cased prefix, so `JIRA`, `jira` and
//!   `JIRA_` collide.
//! - The registry never reaches the network; it only stores clients.

use std::collections::HashMap;
use std::sync::Arc;

use jira_client::JiraClient;
use jira_config::ConfigPrefix;

use crate::error::{ExtensionError, Result};

/// One initialized binding.
#[derive(Debug, Clone)]
pub struct ExtensionState {
    pub prefix: ConfigPrefix,
    pub app_name: String,
    pub client: Arc<JiraClient>,
}

impl ExtensionState {
    pub fn new(prefix: ConfigPrefix, app_name: impl Into<String>, client: Arc<JiraClient>) -> Self {
        Self {
            prefix,
            app_name: app_name.into(),
            client,
        }
    }
}

/// Initialized bindings keyed by lower-cased prefix.
#[derive(Debug, Default)]
pub struct ExtensionRegistry {
    entries: HashMap<String, ExtensionState>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `prefix` is already registered.
    pub fn contains(&self, prefix: &ConfigPrefix) -> bool {
        self.entries.contains_key(&prefix.registry_key())
    }

    pub fn get(&self, prefix: &ConfigPrefix) -> Option<&ExtensionState> {
        self.entries.get(&prefix.registry_key())
    }

    /// Look up the client for a raw prefix such as `"jira_system"`.
    ///
    /// Returns `None` for unknown or invalid prefixes.
    pub fn client(&self, prefix: &str) -> Option<Arc<JiraClient>> {
        let prefix = ConfigPrefix::new(prefix).ok()?;
        self.get(&prefix).map(|state| Arc::clone(&state.client))
    }

    /// Insert `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtensionError::DuplicateRegistration`] if its prefix is taken.
    pub fn register(&mut self, state: ExtensionState) -> Result<()> {
        let key = state.prefix.registry_key();
        if self.entries.contains_key(&key) {
            return Err(ExtensionError::DuplicateRegistration { prefix: key });
        }
        self.entries.insert(key, state);
        Ok(())
    }

    pub fn remove(&mut self, prefix: &ConfigPrefix) -> Option<ExtensionState> {
        self.entries.remove(&prefix.registry_key())
    }

    /// Remove every entry, returning the removed states.
    pub fn clear(&mut self) -> Vec<ExtensionState> {
        self.entries.drain().map(|(_, state)| state).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionState> {
        self.entries.values()
    }
}
