//! Server information model for the Jira `serverInfo` API.

use serde::{Deserialize, Serialize};

/// Server information returned by `GET /rest/api/2/serverInfo`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    pub base_url: String,
    pub version: String,
    #[serde(default)]
    pub version_numbers: Vec<u32>,
    pub deployment_type: Option<String>,
    pub build_number: Option<u64>,
    pub server_title: Option<String>,
}
