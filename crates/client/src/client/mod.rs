//! Main Jira client.
//!
//! This module provides [`JiraClient`], a thin wrapper used by the extension
//! binding. Construction is two-phase: [`builder::JiraClientBuilder::build`]
//! creates the client with session teardown suppressed, [`JiraClient::connect`]
//! probes the server, and [`JiraClient::enable_teardown`] restores normal
//! teardown once construction is over.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Connectivity probe and session teardown (private module)
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Issue, project or search APIs

pub mod builder;
mod session;

use std::sync::OnceLock;
use std::time::Duration;

use crate::auth::{SessionManager, TeardownMode};
use crate::models::ServerInfo;

/// Jira REST API client.
#[derive(Debug)]
pub struct JiraClient {
    http: reqwest::Client,
    server: String,
    session_manager: SessionManager,
    timeout: Duration,
    server_info: OnceLock<ServerInfo>,
}

impl JiraClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JiraClientBuilder {
        builder::JiraClientBuilder::new()
    }

    /// Normalized server URL (no trailing slash).
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Credentials this client sends.
    pub fn auth_strategy(&self) -> &jira_config::AuthStrategy {
        self.session_manager.strategy()
    }

    /// Server info recorded by a successful [`connect`](Self::connect).
    pub fn server_info(&self) -> Option<&ServerInfo> {
        self.server_info.get()
    }

    /// True once [`connect`](Self::connect) succeeded.
    pub fn is_connected(&self) -> bool {
        self.server_info.get().is_some()
    }

    pub fn teardown_mode(&self) -> TeardownMode {
        self.session_manager.teardown_mode()
    }

    pub fn teardown_enabled(&self) -> bool {
        self.teardown_mode() == TeardownMode::Enabled
    }

    /// Finish construction: later [`kill_session`](Self::kill_session) calls reach the server.
    pub fn enable_teardown(&self) {
        self.session_manager.enable_teardown();
    }
}
