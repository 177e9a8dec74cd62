//! Build-time configuration: version, framework registries, vendored components.
//!
//! Everything here is fixed when the binary is built (cargo features and
//! `option_env!`). The composer receives it as a [`BuildConfig`] value so tests
//! can substitute synthetic registries and flags.

const DEFAULT_OSHMEM_FRAMEWORKS: &str = "common atomic memheap scoll spml sshmem";
const DEFAULT_OMPI_FRAMEWORKS: &str =
    "common bml coll fbtl fcoll fs hook io mtl op osc part pml sharedfp topo vprotocol";
const DEFAULT_OPAL_FRAMEWORKS: &str = "common allocator backtrace btl dl if installdirs \
     memchecker memcpy memory mpool patcher pmix rcache reachability shmem smsc threads timer";

const OSHMEM_FRAMEWORKS: &str = match option_env!("MCA_OSHMEM_FRAMEWORKS") {
    Some(v) => v,
    None => DEFAULT_OSHMEM_FRAMEWORKS,
};
const OMPI_FRAMEWORKS: &str = match option_env!("MCA_OMPI_FRAMEWORKS") {
    Some(v) => v,
    None => DEFAULT_OMPI_FRAMEWORKS,
};
const OPAL_FRAMEWORKS: &str = match option_env!("MCA_OPAL_FRAMEWORKS") {
    Some(v) => v,
    None => DEFAULT_OPAL_FRAMEWORKS,
};

/// Version advertised to the launcher as `OMPI_VERSION`.
pub const OMPI_VERSION: &str = match option_env!("OMPI_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Installation prefix baked in at build time, if any.
pub const CONFIGURED_PREFIX: Option<&str> = option_env!("MPIRUN_CONFIGURED_PREFIX");

/// Space-separated framework names per component family.
///
/// `None` means the family was not built at all; `Some("")` means it was built
/// with no frameworks. Both contribute nothing to the prefix list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    pub oshmem: Option<String>,
    pub ompi: Option<String>,
    pub opal: Option<String>,
}

impl PrefixRegistry {
    pub fn compiled() -> Self {
        Self {
            oshmem: cfg!(feature = "oshmem").then(|| OSHMEM_FRAMEWORKS.to_string()),
            ompi: Some(OMPI_FRAMEWORKS.to_string()),
            opal: Some(OPAL_FRAMEWORKS.to_string()),
        }
    }

    /// Registries in the order they are appended: oshmem, ompi, opal.
    pub fn families(&self) -> [Option<&str>; 3] {
        [
            self.oshmem.as_deref(),
            self.ompi.as_deref(),
            self.opal.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub version: String,
    pub registry: PrefixRegistry,
    /// PRRTE built from the vendored tree rather than linked from the system.
    pub internal_prrte: bool,
    /// PMIx built from the vendored tree rather than linked from the system.
    pub internal_pmix: bool,
}

impl BuildConfig {
    pub fn compiled() -> Self {
        Self {
            version: OMPI_VERSION.to_string(),
            registry: PrefixRegistry::compiled(),
            internal_prrte: cfg!(feature = "internal-prrte"),
            internal_pmix: cfg!(feature = "internal-pmix"),
        }
    }
}
