//! Read-only key/value settings sources.
//!
//! Responsibilities:
//! - Define the [`Settings`] lookup seam consumed by the translator.
//! - Implement it for in-memory maps and the process environment.
//! - Filter empty values so they behave like unset keys.
//!
//! Does NOT handle:
//! - Writing settings back (sources are consumed read-only).
//! - `.env` file loading (see `loader`).
//!
//! Invariants:
//! - Empty values are treated as unset.
//! - Any other value, whitespace-only included, is returned verbatim.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A flat settings store with get-or-none semantics.
pub trait Settings {
    /// Return the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: BuildHasher> Settings for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl Settings for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: Settings + ?Sized> Settings for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: Settings + ?Sized> Settings for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Settings backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl Settings for EnvSettings {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Look up `key`, returning `None` if unset or empty.
///
/// Whitespace-only values are kept: they count as set.
pub fn setting_or_none<S: Settings + ?Sized>(settings: &S, key: &str) -> Option<String> {
    settings.get(key).filter(|value| !value.is_empty())
}

/// Read an environment variable, returning `None` if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    setting_or_none(&EnvSettings, key)
}
