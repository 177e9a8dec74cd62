use std::io;
use std::path::PathBuf;

use thiserror::Error;

use mpirun_core::InstallDirsError;

/// A required resource (e.g. the installation prefix) was not found.
pub const ERR_NOT_FOUND: i32 = -13;

/// Runtime initialization failed; carries the numeric runtime status.
#[derive(Debug, Error)]
#[error("runtime initialization failed with status {status}: {reason}")]
pub struct BootstrapError {
    pub status: i32,
    pub reason: String,
}

impl BootstrapError {
    pub fn new(status: i32, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }
}

impl From<InstallDirsError> for BootstrapError {
    fn from(err: InstallDirsError) -> Self {
        match err {
            InstallDirsError::PrefixNotFound => Self::new(ERR_NOT_FOUND, err.to_string()),
        }
    }
}

/// The launcher could not be started or reported failure.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("launcher `{name}` not found in {} or on PATH", bindir.display())]
    NotFound { name: String, bindir: PathBuf },

    #[error("failed to start {}: {source}", program.display())]
    Exec {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("launcher exited with status {0}")]
    Exited(i32),
}

impl LaunchError {
    /// Line shown in the help message. OS failures keep the errno-style
    /// `Error: <description>` form; the rest read as sentences.
    pub fn describe(&self) -> String {
        match self {
            Self::Exec { source, .. } => format!("Error: {source}"),
            Self::NotFound { name, bindir } => format!(
                "The {name} executable was not found in {} or on the PATH.",
                bindir.display()
            ),
            Self::Exited(code) => format!("The launcher exited with status {code}."),
        }
    }
}

/// Fatal shim failure. Both classes terminate the process with status 1.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl ShimError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}
