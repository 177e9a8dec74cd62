//! Launcher environment: overlay type, MCA prefix list and the composer.
//!
//! The composer only writes into an [`EnvOverlay`]; the launcher backend
//! applies it to the child command, so the shim's own environment is never
//! mutated.

pub mod composer;
pub mod overlay;
pub mod prefixes;

pub use composer::{compose, tool_name, ComposeInputs};
pub use overlay::EnvOverlay;
