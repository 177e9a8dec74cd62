//! Shim orchestration: bootstrap → compose → launch, strictly in sequence.

use std::ffi::{OsStr, OsString};

use mpirun_core::BuildConfig;

use crate::bootstrap::RuntimeBootstrap;
use crate::env::{compose, ComposeInputs};
use crate::error::ShimError;
use crate::launcher::{LaunchBackend, LaunchRequest};

pub struct Shim<B, L> {
    build: BuildConfig,
    bootstrap: B,
    launcher: L,
}

impl<B: RuntimeBootstrap, L: LaunchBackend> Shim<B, L> {
    pub fn new(build: BuildConfig, bootstrap: B, launcher: L) -> Self {
        Self {
            build,
            bootstrap,
            launcher,
        }
    }

    /// Run the shim. `opal_prefix` must be captured before anything else runs.
    ///
    /// A bootstrap failure returns before any composition; a launcher failure
    /// is returned as is. On Unix a successful launch never returns.
    pub fn run(
        &self,
        argv: Vec<OsString>,
        opal_prefix: Option<&OsStr>,
    ) -> Result<(), ShimError> {
        let boot = self.bootstrap.initialize(argv)?;

        let env = compose(
            &self.build,
            &ComposeInputs {
                argv0: boot.argv.first().map(OsString::as_os_str),
                opal_prefix,
                libdir: &boot.install_dirs.libdir,
            },
        );

        tracing::debug!(backend = self.launcher.name(), vars = env.len(), "environment composed");
        self.launcher.launch(&LaunchRequest {
            argv: &boot.argv,
            env: &env,
            bindir: &boot.install_dirs.bindir,
        })?;
        Ok(())
    }
}
