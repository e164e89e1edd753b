//! Session endpoint.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::auth::SessionManager;
use crate::endpoints::{check_status, send};
use crate::error::Result;

/// Log out of the current server session.
pub async fn delete_session(
    client: &Client,
    server: &str,
    session: &SessionManager,
    timeout: Duration,
) -> Result<()> {
    let url = format!("{}/rest/auth/1/session", server);
    debug!(url = %url, "Deleting Jira session");

    let response = send(client.delete(&url), session, &url, timeout).await?;
    check_status(response, &url).await?;
    Ok(())
}
