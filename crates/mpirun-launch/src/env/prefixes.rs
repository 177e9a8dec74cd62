//! MCA prefix list: the configuration namespaces PRRTE should treat as ours.

use mpirun_core::PrefixRegistry;

/// Built-in namespaces, always first and in this order.
pub const SEED_PREFIXES: [&str; 3] = ["mca", "opal", "ompi"];

/// Framework names that must never be advertised; PRRTE handles them itself.
pub const RESERVED_PREFIXES: [&str; 2] = ["common", "pmix"];

/// Seeds followed by every non-reserved framework of each registry, in
/// registry order. Duplicates across registries are kept.
pub fn mca_prefixes(registry: &PrefixRegistry) -> Vec<String> {
    let mut out: Vec<String> = SEED_PREFIXES.iter().map(|s| s.to_string()).collect();
    for frameworks in registry.families() {
        append_prefixes(&mut out, frameworks);
    }
    out
}

/// Split `frameworks` on spaces and append the tokens that are not reserved.
pub fn append_prefixes(out: &mut Vec<String>, frameworks: Option<&str>) {
    let Some(frameworks) = frameworks else {
        return;
    };
    out.extend(
        frameworks
            .split(' ')
            .filter(|t| !t.is_empty())
            .filter(|t| !RESERVED_PREFIXES.contains(t))
            .map(String::from),
    );
}

/// Value for `OMPI_MCA_PREFIXES`.
pub fn join_prefixes(prefixes: &[String]) -> String {
    prefixes.join(",")
}
