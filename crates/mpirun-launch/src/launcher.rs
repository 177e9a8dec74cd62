//! LaunchBackend trait: extension point for handing control to the launcher.
//!
//! The default backend runs PRRTE's `prterun`. On Unix it replaces the current
//! process image, so `launch` only returns on failure. Elsewhere it spawns the
//! launcher and waits for it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use mpirun_core::config::env_keys::shim;
use mpirun_core::config::LauncherConfig;
use mpirun_core::observability;

use crate::env::EnvOverlay;
use crate::error::LaunchError;

/// Everything the launcher needs: the bootstrapper-returned argv, the
/// composed environment and where the launcher should live. argv is kept as
/// OS strings so job arguments reach the launcher byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct LaunchRequest<'a> {
    pub argv: &'a [OsString],
    pub env: &'a EnvOverlay,
    pub bindir: &'a Path,
}

/// Extension point for launcher backends.
pub trait LaunchBackend {
    /// Backend name for logging and diagnostics.
    fn name(&self) -> &str;

    fn launch(&self, request: &LaunchRequest<'_>) -> Result<(), LaunchError>;
}

/// PRRTE `prterun` backend.
#[derive(Debug, Clone, Default)]
pub struct PrteLauncher {
    config: LauncherConfig,
}

impl PrteLauncher {
    pub fn new(config: LauncherConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(LauncherConfig::from_env())
    }

    /// Launcher program: explicit override, then `<bindir>/prterun`, then PATH.
    pub fn resolve_program(&self, bindir: &Path) -> Result<PathBuf, LaunchError> {
        if let Some(ref program) = self.config.program {
            return Ok(PathBuf::from(program));
        }
        let bundled = bindir.join(shim::DEFAULT_PRTERUN);
        if bundled.is_file() {
            return Ok(bundled);
        }
        which::which(shim::DEFAULT_PRTERUN).map_err(|_| LaunchError::NotFound {
            name: shim::DEFAULT_PRTERUN.to_string(),
            bindir: bindir.to_path_buf(),
        })
    }
}

impl LaunchBackend for PrteLauncher {
    fn name(&self) -> &str {
        "prterun"
    }

    fn launch(&self, request: &LaunchRequest<'_>) -> Result<(), LaunchError> {
        let program = self.resolve_program(request.bindir)?;
        let argv: Vec<String> = request
            .argv
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        tracing::info!(
            program = %program.display(),
            argv = ?argv,
            "handing off to launcher"
        );
        observability::audit_launch_started(
            &program.to_string_lossy(),
            &argv,
            request.env.iter().map(|(k, v)| (k, v.to_string_lossy())),
        );

        let cmd = build_command(&program, request);
        handoff(cmd, &program)
    }
}

/// argv[0] stays the launcher's argv[0]; the remaining arguments pass through
/// untouched.
pub fn build_command(program: &Path, request: &LaunchRequest<'_>) -> Command {
    let mut cmd = Command::new(program);
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        if let Some(arg0) = request.argv.first() {
            cmd.arg0(arg0);
        }
    }
    cmd.args(request.argv.iter().skip(1));
    request.env.apply_to(&mut cmd);
    cmd
}

#[cfg(unix)]
fn handoff(mut cmd: Command, program: &Path) -> Result<(), LaunchError> {
    use std::os::unix::process::CommandExt;
    let source = cmd.exec();
    Err(LaunchError::Exec {
        program: program.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn handoff(mut cmd: Command, program: &Path) -> Result<(), LaunchError> {
    let status = cmd.status().map_err(|source| LaunchError::Exec {
        program: program.to_path_buf(),
        source,
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::Exited(status.code().unwrap_or(-1)))
    }
}
