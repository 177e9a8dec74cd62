//! Configuration structs grouped by concern, loaded from the environment.

use super::env_keys::{observability as obv_keys, shim};
use super::loader::{env_bool, env_optional, env_or};

/// Observability: quiet, log level, JSON output, audit log.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(Self::load)
    }

    fn load() -> Self {
        Self {
            quiet: env_bool(obv_keys::OMPI_SHIM_QUIET, false),
            log_level: env_or(obv_keys::OMPI_SHIM_LOG_LEVEL, || "warn".to_string()),
            log_json: env_bool(obv_keys::OMPI_SHIM_LOG_JSON, false),
            audit_log: env_optional(obv_keys::OMPI_SHIM_AUDIT_LOG, &[]),
        }
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> String {
        if self.quiet {
            "error".to_string()
        } else {
            self.log_level.clone()
        }
    }
}

/// Launcher selection.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    /// Explicit launcher program; bypasses the bindir and PATH lookup.
    pub program: Option<String>,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self {
            program: env_optional(shim::OMPI_SHIM_PRTERUN, shim::PRTERUN_ALIASES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_overrides_level() {
        let cfg = ObservabilityConfig {
            quiet: true,
            log_level: "debug".into(),
            log_json: false,
            audit_log: None,
        };
        assert_eq!(cfg.filter_directive(), "error");

        let cfg = ObservabilityConfig { quiet: false, ..cfg };
        assert_eq!(cfg.filter_directive(), "debug");
    }
}
