//! Application binding for the Jira client.
//!
//! Host applications hand their settings to an [`AppContext`] and call
//! [`JiraExtension::init_app`] once per credential prefix. Each call translates
//! the prefixed settings, builds a [`jira_client::JiraClient`], probes the
//! server and registers the client in the context's [`ExtensionRegistry`].

pub mod app;
pub mod error;
pub mod extension;
pub mod logging;
pub mod registry;

pub use app::AppContext;
pub use error::{ExtensionError, Result};
pub use extension::JiraExtension;
pub use registry::{ExtensionRegistry, ExtensionState};
