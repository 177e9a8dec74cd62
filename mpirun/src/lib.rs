//! mpirun shim library: wires the production bootstrap and launcher together
//! and maps failures to diagnostics and exit codes.

mod help;

use std::ffi::OsString;
use std::process::ExitCode;

use mpirun_core::config::env_keys::input;
use mpirun_core::config::env_raw;
use mpirun_core::BuildConfig;
use mpirun_launch::{OpalBootstrap, PrteLauncher, Shim, ShimError};

pub use help::{HelpFile, HELP_MPIRUN};

/// Help topic rendered when the launcher cannot take over.
pub const PRTE_LAUNCH_FAILED: &str = "prte-launch-failed";

/// Run the shim with the process argv and environment.
pub fn run_cli() -> ExitCode {
    // Captured once, before bootstrap; discovery and composition share it.
    let opal_prefix = env_raw(input::OPAL_PREFIX);
    let argv: Vec<OsString> = std::env::args_os().collect();

    let shim = Shim::new(
        BuildConfig::compiled(),
        OpalBootstrap::new(opal_prefix.clone()),
        PrteLauncher::from_env(),
    );
    match shim.run(argv, opal_prefix.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", diagnostic(&err));
            ExitCode::from(err.exit_code())
        }
    }
}

/// User-facing text for a fatal error.
pub fn diagnostic(err: &ShimError) -> String {
    match err {
        ShimError::Bootstrap(e) => {
            tracing::error!(status = e.status, reason = %e.reason, "runtime initialization failed");
            format!("Failed initializing opal: {}\n", e.status)
        }
        ShimError::Launch(e) => {
            tracing::debug!(error = %e, "launcher handoff failed");
            HELP_MPIRUN.render(PRTE_LAUNCH_FAILED, true, &[e.describe().as_str()])
        }
    }
}
