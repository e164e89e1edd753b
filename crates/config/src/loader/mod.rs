//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` bound to one prefix.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;

pub use builder::ConfigLoader;

#[cfg(test)]
mod tests;
