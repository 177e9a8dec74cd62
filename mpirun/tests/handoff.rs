//! End-to-end runs of the mpirun binary against stand-in launchers.
//!
//! `/bin/sh` stands in for prterun: the shim passes `-c <script>` straight
//! through, so the script sees exactly the environment the launcher would.
#![cfg(unix)]

use std::process::Command;

const REPORT: &str = r#"printf '%s\n' "$OMPI_TOOL_NAME" "$PRTE_MCA_schizo_proxy" "$OMPI_LIBDIR_LOC" "$OMPI_MCA_PREFIXES" "${PRTE_PREFIX-unset}" "${PMIX_PREFIX-unset}""#;

fn mpirun() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mpirun"));
    for key in [
        "RUST_LOG",
        "OPAL_BINDIR",
        "OPAL_LIBDIR",
        "OMPI_SHIM_PRTERUN",
        "PRTE_LAUNCHER",
        "OMPI_SHIM_AUDIT_LOG",
        "PRTE_PREFIX",
        "PMIX_PREFIX",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_handoff_environment() {
    let prefix = tempfile::tempdir().unwrap();
    let audit = prefix.path().join("audit.jsonl");

    let out = mpirun()
        .env("OPAL_PREFIX", prefix.path())
        .env("OMPI_SHIM_PRTERUN", "/bin/sh")
        .env("OMPI_SHIM_AUDIT_LOG", &audit)
        .args(["-c", REPORT])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    let prefix_str = prefix.path().to_string_lossy().into_owned();
    assert_eq!(lines[0], "mpirun");
    assert_eq!(lines[1], "ompi");
    assert_eq!(lines[2], format!("{prefix_str}/lib"));
    assert!(lines[3].starts_with("mca,opal,ompi"));
    assert!(!lines[3].split(',').any(|t| t == "common" || t == "pmix"));

    let expected_prrte = if cfg!(feature = "internal-prrte") { prefix_str.as_str() } else { "unset" };
    let expected_pmix = if cfg!(feature = "internal-pmix") { prefix_str.as_str() } else { "unset" };
    assert_eq!(lines[4], expected_prrte);
    assert_eq!(lines[5], expected_pmix);

    let record: serde_json::Value =
        serde_json::from_str(std::fs::read_to_string(&audit).unwrap().trim()).unwrap();
    assert_eq!(record["event"], "launch_started");
    assert_eq!(record["program"], "/bin/sh");
    assert_eq!(record["argv"][1], "-c");
}

#[test]
fn test_missing_launcher_exits_one_with_help() {
    let prefix = tempfile::tempdir().unwrap();
    let missing = prefix.path().join("bin").join("prterun-missing");

    let out = mpirun()
        .env("OPAL_PREFIX", prefix.path())
        .env("OMPI_SHIM_PRTERUN", &missing)
        .arg("hostname")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unable to hand control to the PRRTE launcher"));
    assert!(stderr.contains(&std::io::Error::from_raw_os_error(2).to_string()));
}

#[test]
fn test_non_utf8_argument_reaches_launcher_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let prefix = tempfile::tempdir().unwrap();
    let file = OsStr::from_bytes(b"caf\xe9.dat");

    let out = mpirun()
        .env("OPAL_PREFIX", prefix.path())
        .env("OMPI_SHIM_PRTERUN", "/bin/sh")
        .args([OsStr::new("-c"), OsStr::new(r#"printf '%s' "$1""#), OsStr::new("x"), file])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(out.stdout, b"caf\xe9.dat");
}

#[test]
fn test_non_utf8_prefix_forwarded_and_used_for_libdir() {
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempfile::tempdir().unwrap();
    let prefix = tmp.path().join(std::ffi::OsStr::from_bytes(b"caf\xe9"));
    std::fs::create_dir(&prefix).unwrap();

    let out = mpirun()
        .env("OPAL_PREFIX", &prefix)
        .env("OMPI_SHIM_PRTERUN", "/bin/sh")
        .args(["-c", r#"printf '%s|%s' "${PRTE_PREFIX-unset}" "$OMPI_LIBDIR_LOC""#])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let prefix_bytes = prefix.as_os_str().as_bytes();
    let mut expected = Vec::new();
    if cfg!(feature = "internal-prrte") {
        expected.extend_from_slice(prefix_bytes);
    } else {
        expected.extend_from_slice(b"unset");
    }
    expected.push(b'|');
    expected.extend_from_slice(prefix_bytes);
    expected.extend_from_slice(b"/lib");
    assert_eq!(out.stdout, expected);
}

#[test]
fn test_padded_prefix_shared_by_libdir_and_forwarding() {
    let tmp = tempfile::tempdir().unwrap();
    let padded = format!(" {}", tmp.path().display());

    let out = mpirun()
        .env("OPAL_PREFIX", &padded)
        .env("OMPI_SHIM_PRTERUN", "/bin/sh")
        .args(["-c", r#"printf '%s|%s' "${PRTE_PREFIX-unset}" "$OMPI_LIBDIR_LOC""#])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let (forwarded, libdir) = stdout.split_once('|').unwrap();
    if cfg!(feature = "internal-prrte") {
        assert_eq!(forwarded, padded);
    }
    assert_eq!(libdir, format!("{padded}/lib"));
}
