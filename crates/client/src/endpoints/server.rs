//! Server information endpoint.

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::auth::SessionManager;
use crate::endpoints::{check_status, send};
use crate::error::{ClientError, Result};
use crate::models::ServerInfo;

/// Get server information.
///
/// Used as the connectivity probe during client construction.
pub async fn get_server_info(
    client: &Client,
    server: &str,
    session: &SessionManager,
    timeout: Duration,
) -> Result<ServerInfo> {
    let url = format!("{}/rest/api/2/serverInfo", server);
    debug!(url = %url, "Fetching Jira server info");

    let response = send(client.get(&url), session, &url, timeout).await?;
    let response = check_status(response, &url).await?;

    response
        .json::<ServerInfo>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse server info: {}", e)))
}
