//! RuntimeBootstrap trait: one-time process initialization before composition.

use std::ffi::OsString;

use mpirun_core::{observability, InstallDirs};

use crate::error::BootstrapError;

/// Result of a successful bootstrap. `argv` replaces the caller's argv for
/// every later step.
#[derive(Debug, Clone)]
pub struct Bootstrapped {
    pub argv: Vec<OsString>,
    pub install_dirs: InstallDirs,
}

/// Extension point for runtime initialization.
pub trait RuntimeBootstrap {
    fn initialize(&self, argv: Vec<OsString>) -> Result<Bootstrapped, BootstrapError>;
}

/// Production bootstrap: tracing plus installation directory discovery.
/// The shim recognizes no global options, so argv passes through unchanged.
#[derive(Debug, Clone, Default)]
pub struct OpalBootstrap {
    /// `OPAL_PREFIX` as captured at startup; the composer sees the same value.
    opal_prefix: Option<OsString>,
}

impl OpalBootstrap {
    pub fn new(opal_prefix: Option<OsString>) -> Self {
        Self { opal_prefix }
    }
}

impl RuntimeBootstrap for OpalBootstrap {
    fn initialize(&self, argv: Vec<OsString>) -> Result<Bootstrapped, BootstrapError> {
        observability::init_tracing();

        let install_dirs = InstallDirs::discover(self.opal_prefix.as_deref())?;
        tracing::debug!(
            prefix = %install_dirs.prefix.display(),
            bindir = %install_dirs.bindir.display(),
            libdir = %install_dirs.libdir.display(),
            "installation directories"
        );

        Ok(Bootstrapped { argv, install_dirs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_prefix_drives_discovery() {
        let tmp = tempfile::tempdir().unwrap();
        let boot = OpalBootstrap::new(Some(tmp.path().as_os_str().to_os_string()));
        let argv = vec![OsString::from("mpirun"), OsString::from("hostname")];
        let out = boot.initialize(argv.clone()).unwrap();
        assert_eq!(out.argv, argv);
        assert_eq!(out.install_dirs.prefix, tmp.path());
        if std::env::var_os("OPAL_LIBDIR").is_none() {
            assert_eq!(out.install_dirs.libdir, tmp.path().join("lib"));
        }
    }
}
