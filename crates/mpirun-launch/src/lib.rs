//! Launch side of the mpirun shim.
//!
//! - `bootstrap`: runtime initialization (tracing, installation dirs)
//! - `env`: launcher environment composition and MCA prefixes
//! - `launcher`: handoff to PRRTE `prterun`
//! - `runner`: the bootstrap → compose → launch sequence

pub mod bootstrap;
pub mod env;
pub mod error;
pub mod launcher;
pub mod runner;

pub use bootstrap::{Bootstrapped, OpalBootstrap, RuntimeBootstrap};
pub use error::{BootstrapError, LaunchError, ShimError};
pub use launcher::{LaunchBackend, LaunchRequest, PrteLauncher};
pub use runner::Shim;
