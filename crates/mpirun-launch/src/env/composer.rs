//! Compose the environment PRRTE expects before handoff.
//!
//! Pure function of the build configuration and the startup inputs: identity,
//! prefix reconciliation for vendored components, libdir, MCA prefixes.

use std::ffi::{OsStr, OsString};
use std::path::Path;

use mpirun_core::config::env_keys::launcher as keys;
use mpirun_core::BuildConfig;

use super::overlay::EnvOverlay;
use super::prefixes::{join_prefixes, mca_prefixes};

/// Tool name used when argv[0] is missing or has no file name.
pub const DEFAULT_TOOL_NAME: &str = "mpirun";

/// Inputs gathered at startup. Values are raw OS strings and are forwarded
/// byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct ComposeInputs<'a> {
    /// argv[0] as returned by the bootstrapper.
    pub argv0: Option<&'a OsStr>,
    /// `OPAL_PREFIX` as captured before bootstrap.
    pub opal_prefix: Option<&'a OsStr>,
    pub libdir: &'a Path,
}

pub fn compose(build: &BuildConfig, inputs: &ComposeInputs<'_>) -> EnvOverlay {
    let mut env = EnvOverlay::new();

    env.set(keys::PRTE_MCA_SCHIZO_PROXY, keys::SCHIZO_PROXY_OMPI);
    env.set(keys::OMPI_VERSION, build.version.as_str());
    env.set(keys::OMPI_TOOL_NAME, tool_name(inputs.argv0));

    if let Some(prefix) = inputs.opal_prefix {
        if build.internal_prrte {
            env.set(keys::PRTE_PREFIX, prefix);
        }
        if build.internal_pmix {
            env.set(keys::PMIX_PREFIX, prefix);
        }
    }

    env.set(keys::OMPI_LIBDIR_LOC, inputs.libdir.as_os_str());

    env.set(
        keys::OMPI_MCA_PREFIXES,
        join_prefixes(&mca_prefixes(&build.registry)),
    );

    for (key, value) in env.iter() {
        tracing::debug!(key, value = %value.to_string_lossy(), "composed launcher variable");
    }
    env
}

/// Basename of argv[0].
pub fn tool_name(argv0: Option<&OsStr>) -> OsString {
    let Some(argv0) = argv0 else {
        return DEFAULT_TOOL_NAME.into();
    };
    let base = Path::new(argv0).file_name().unwrap_or(argv0);
    if base.is_empty() {
        DEFAULT_TOOL_NAME.into()
    } else {
        base.to_os_string()
    }
}
