//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client`, the normalized server
//! URL and the [`SessionManager`](crate::auth::SessionManager) that attaches
//! credentials.

mod server;
mod session;

pub use server::get_server_info;
pub use session::delete_session;

use reqwest::Response;
use std::time::Duration;

use crate::auth::SessionManager;
use crate::error::{ClientError, Result};

/// Send an authorized request, mapping transport failures.
pub(crate) async fn send(
    builder: reqwest::RequestBuilder,
    session: &SessionManager,
    url: &str,
    timeout: Duration,
) -> Result<Response> {
    session
        .authorize(builder)
        .send()
        .await
        .map_err(|e| ClientError::from_transport(e, url, timeout))
}

/// Turn a non-success response into an error.
///
/// 401 maps to [`ClientError::AuthFailed`]; other statuses to [`ClientError::ApiError`].
pub(crate) async fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status.as_u16() == 401 {
        return Err(ClientError::AuthFailed(format!(
            "Jira rejected the configured credentials ({})",
            url
        )));
    }
    Err(ClientError::ApiError {
        status: status.as_u16(),
        url: url.to_string(),
        message: body,
    })
}
