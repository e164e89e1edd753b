//! Host application context.
//!
//! Responsibilities:
//! - Own the application's settings store.
//! - Own the registry of Jira clients initialized for this application.
//!
//! Invariants:
//! - Registries are never shared between contexts; dropping the context
//!   drops its clients.

use std::fmt;

use jira_config::Settings;

use crate::registry::{ExtensionRegistry, ExtensionState};

/// Settings and extension state for one host application.
pub struct AppContext {
    name: String,
    settings: Box<dyn Settings + Send + Sync>,
    extensions: ExtensionRegistry,
}

impl AppContext {
    /// Create a context that reads its settings from `settings`.
    pub fn new(name: impl Into<String>, settings: impl Settings + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            settings: Box::new(settings),
            extensions: ExtensionRegistry::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &(dyn Settings + Send + Sync) {
        self.settings.as_ref()
    }

    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut ExtensionRegistry {
        &mut self.extensions
    }

    /// Drop every registered client, returning the removed states.
    pub fn teardown(&mut self) -> Vec<ExtensionState> {
        let removed = self.extensions.clear();
        tracing::debug!(app = %self.name, removed = removed.len(), "Application context torn down");
        removed
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("name", &self.name)
            .field("extensions", &self.extensions.len())
            .finish_non_exhaustive()
    }
}
