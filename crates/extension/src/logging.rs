//! Tracing subscriber setup for host applications.
//!
//! The library crates only emit `tracing` events; applications that have no
//! subscriber of their own can install this one.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format for [`init_tracing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Build the filter from `RUST_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(format: LogFormat) -> bool {
    let (text, json) = match format {
        LogFormat::Text => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(env_filter())
        .with(text)
        .with(json)
        .try_init()
        .is_ok()
}
