//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test `.env` loading and its `DOTENV_DISABLED` gate.
//! - Test translation of the process environment under different prefixes.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.
