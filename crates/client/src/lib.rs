//! Jira REST API client.
//!
//! A thin client over the Jira REST API used by the extension binding. It is
//! constructed from translated settings ([`jira_config::Config`]), supports
//! HTTP Basic and OAuth credentials, and separates construction from session
//! teardown so a failed first connection never tries to log out of a session
//! that was never opened.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::{SessionManager, TeardownMode};
pub use client::JiraClient;
pub use client::builder::JiraClientBuilder;
pub use error::{ClientError, Result};
pub use models::ServerInfo;
