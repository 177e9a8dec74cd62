//! Unified configuration layer.
//!
//! All environment reads go through this module; other code uses the
//! structured configs instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or, env_optional, env_bool, env_raw
//! - `schema`: ObservabilityConfig, LauncherConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, env_raw};
pub use schema::{LauncherConfig, ObservabilityConfig};
