//! Environment readers shared by the config structs.
//!
//! Shim settings are UTF-8 strings with blank-means-unset semantics.
//! Installation paths are read raw (`env_raw`) so they reach the launcher
//! byte for byte.

use std::env;
use std::ffi::OsString;

/// Value of `key`, or `default()` when it is unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Trimmed value of `key` or of the first alias that is set. Blank is `None`.
pub fn env_optional(key: &str, aliases: &[&str]) -> Option<String> {
    std::iter::once(key)
        .chain(aliases.iter().copied())
        .find_map(|k| env::var(k).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// `0`, `false`, `no` and `off` (any case) are false; any other value is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(s) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        Err(_) => default,
    }
}

/// Untouched value of `key`: not trimmed, not required to be UTF-8, and
/// `Some` even when empty.
pub fn env_raw(key: &str) -> Option<OsString> {
    env::var_os(key)
}
