//! Environment variable key constants.
//!
//! Inputs are read once at startup; launcher keys are only ever written into the
//! overlay handed to the launcher, never read back.

/// Variables the shim reads from its own environment.
pub mod input {
    /// Installation prefix supplied by the user (relocated installs).
    pub const OPAL_PREFIX: &str = "OPAL_PREFIX";
    /// Overrides `<prefix>/bin`; may contain `${prefix}`.
    pub const OPAL_BINDIR: &str = "OPAL_BINDIR";
    /// Overrides `<prefix>/lib`; may contain `${prefix}`.
    pub const OPAL_LIBDIR: &str = "OPAL_LIBDIR";
}

/// Variables composed for the launcher and its components.
pub mod launcher {
    pub const PRTE_MCA_SCHIZO_PROXY: &str = "PRTE_MCA_schizo_proxy";
    /// Value of [`PRTE_MCA_SCHIZO_PROXY`]: selects the Open MPI personality.
    pub const SCHIZO_PROXY_OMPI: &str = "ompi";
    pub const OMPI_TOOL_NAME: &str = "OMPI_TOOL_NAME";
    pub const OMPI_VERSION: &str = "OMPI_VERSION";
    pub const PRTE_PREFIX: &str = "PRTE_PREFIX";
    pub const PMIX_PREFIX: &str = "PMIX_PREFIX";
    /// Library directory, consumed by the ompi schizo component.
    pub const OMPI_LIBDIR_LOC: &str = "OMPI_LIBDIR_LOC";
    /// Comma-separated MCA prefixes that belong to Open MPI.
    pub const OMPI_MCA_PREFIXES: &str = "OMPI_MCA_PREFIXES";
}

/// Shim behavior: launcher selection.
pub mod shim {
    pub const OMPI_SHIM_PRTERUN: &str = "OMPI_SHIM_PRTERUN";
    pub const PRTERUN_ALIASES: &[&str] = &["PRTE_LAUNCHER"];

    /// Executable looked up in bindir and on PATH when no override is set.
    pub const DEFAULT_PRTERUN: &str = "prterun";
}

/// Observability and logging.
pub mod observability {
    pub const OMPI_SHIM_QUIET: &str = "OMPI_SHIM_QUIET";
    pub const OMPI_SHIM_LOG_LEVEL: &str = "OMPI_SHIM_LOG_LEVEL";
    pub const OMPI_SHIM_LOG_JSON: &str = "OMPI_SHIM_LOG_JSON";
    pub const OMPI_SHIM_AUDIT_LOG: &str = "OMPI_SHIM_AUDIT_LOG";
}
