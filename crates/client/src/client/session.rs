//! Connectivity probe and session teardown.
//!
//! # What this module does NOT handle:
//! - Retrying a failed probe; failures surface immediately.
//!
//! # Invariants
//! - A failed `connect()` always attempts `kill_session()`, matching the
//!   behavior of the Jira client library; while teardown is suppressed that
//!   call never reaches the server.
//! - `kill_session()` is a no-op until teardown is enabled.

use tracing::debug;

use crate::auth::TeardownMode;
use crate::client::JiraClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::ServerInfo;

impl JiraClient {
    /// Probe the server and record its info.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionFailed`](crate::ClientError::ConnectionFailed)
    /// or [`ClientError::Timeout`](crate::ClientError::Timeout) when the server is
    /// unreachable, [`ClientError::AuthFailed`](crate::ClientError::AuthFailed) on 401,
    /// and [`ClientError::ApiError`](crate::ClientError::ApiError) for other non-success statuses.
    pub async fn connect(&self) -> Result<ServerInfo> {
        let result =
            endpoints::get_server_info(&self.http, &self.server, &self.session_manager, self.timeout)
                .await;

        match result {
            Ok(info) => {
                debug!(
                    server = %self.server,
                    version = %info.version,
                    "Connected to Jira"
                );
                let _ = self.server_info.set(info.clone());
                Ok(info)
            }
            Err(err) => {
                if let Err(teardown_err) = self.kill_session().await {
                    debug!(error = %teardown_err, "Session teardown after failed connect also failed");
                }
                Err(err)
            }
        }
    }

    /// Tear down the server session.
    ///
    /// Does nothing while teardown is suppressed.
    pub async fn kill_session(&self) -> Result<()> {
        if self.session_manager.teardown_mode() == TeardownMode::Suppressed {
            debug!(server = %self.server, "Session teardown suppressed during construction");
            return Ok(());
        }

        endpoints::delete_session(&self.http, &self.server, &self.session_manager, self.timeout)
            .await
    }
}
