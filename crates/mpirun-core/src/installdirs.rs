//! Installation directory discovery.
//!
//! Prefix resolution order: `OPAL_PREFIX`, the prefix configured at build time,
//! then the running executable's location (`<prefix>/bin/mpirun`). An empty
//! `OPAL_PREFIX` does not name a tree and falls through to the next source.
//! `OPAL_BINDIR` / `OPAL_LIBDIR` override the derived directories and may
//! start with `${prefix}` or `@{prefix}`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::build_info::CONFIGURED_PREFIX;
use crate::config::env_keys::input;
use crate::config::env_optional;

#[derive(Debug, Error)]
pub enum InstallDirsError {
    #[error(
        "cannot determine installation prefix: {} is not set, no prefix was configured at build time and the executable location is unknown",
        input::OPAL_PREFIX
    )]
    PrefixNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDirs {
    pub prefix: PathBuf,
    pub bindir: PathBuf,
    pub libdir: PathBuf,
}

impl InstallDirs {
    /// Discover from the captured `OPAL_PREFIX` value, the process environment
    /// and the executable path. `opal_prefix` is taken as is, never re-read.
    pub fn discover(opal_prefix: Option<&OsStr>) -> Result<Self, InstallDirsError> {
        let exe = std::env::current_exe().ok();
        Self::resolve(
            opal_prefix,
            |key| env_optional(key, &[]),
            exe.as_deref(),
            CONFIGURED_PREFIX,
        )
    }

    pub fn resolve<F>(
        opal_prefix: Option<&OsStr>,
        lookup: F,
        exe: Option<&Path>,
        configured_prefix: Option<&str>,
    ) -> Result<Self, InstallDirsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = opal_prefix
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                configured_prefix
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| exe.and_then(prefix_from_exe))
            .ok_or(InstallDirsError::PrefixNotFound)?;

        let bindir = lookup(input::OPAL_BINDIR)
            .map(|v| expand_prefix(&v, &prefix))
            .unwrap_or_else(|| prefix.join("bin"));
        let libdir = lookup(input::OPAL_LIBDIR)
            .map(|v| expand_prefix(&v, &prefix))
            .unwrap_or_else(|| prefix.join("lib"));

        Ok(Self {
            prefix,
            bindir,
            libdir,
        })
    }
}

/// `<prefix>/bin/<exe>` → `<prefix>`.
fn prefix_from_exe(exe: &Path) -> Option<PathBuf> {
    let prefix = exe.parent()?.parent()?;
    if prefix.as_os_str().is_empty() {
        return None;
    }
    Some(prefix.to_path_buf())
}

/// Splices the prefix in as raw bytes so a non-UTF-8 prefix survives.
fn expand_prefix(value: &str, prefix: &Path) -> PathBuf {
    for marker in ["${prefix}", "@{prefix}"] {
        if let Some(rest) = value.strip_prefix(marker) {
            let mut out = prefix.as_os_str().to_os_string();
            out.push(rest);
            return PathBuf::from(out);
        }
    }
    PathBuf::from(value)
}
