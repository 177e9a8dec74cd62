//! mpirun shim core: configuration, build info, installation dirs, observability.

pub mod build_info;
pub mod config;
pub mod installdirs;
pub mod observability;

pub use build_info::{BuildConfig, PrefixRegistry};
pub use installdirs::{InstallDirs, InstallDirsError};
