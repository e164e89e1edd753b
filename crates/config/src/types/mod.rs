//! Client parameter type definitions.
//!
//! Responsibilities:
//! - Define the translated output (`Config`, `ClientOptions`).
//! - Define the authentication schemes (`AuthStrategy`, `BasicAuth`, `OAuthConfig`).
//! - Provide serialization helpers for sensitive types.
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{AuthStrategy, BasicAuth, OAuthConfig};
pub use connection::{ClientOptions, Config};
