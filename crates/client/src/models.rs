//! Data models for Jira API responses.

mod server;

pub use server::ServerInfo;
