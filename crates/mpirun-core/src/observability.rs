//! Observability: tracing init and the opt-in launch audit log.
//!
//! Uses config::ObservabilityConfig for OMPI_SHIM_QUIET, LOG_LEVEL, LOG_JSON and AUDIT_LOG.
//! All output goes to stderr; stdout belongs to the job.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::{json, Value};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize tracing. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.filter_directive()));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

/// Build the `launch_started` record. Callers convert OS strings lossily;
/// the record is for humans, the launcher gets the raw values.
pub fn launch_record<I, K, V>(program: &str, argv: &[String], env: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let env: serde_json::Map<String, Value> = env
        .into_iter()
        .map(|(k, v)| (k.into(), Value::String(v.into())))
        .collect();
    json!({
        "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "event": "launch_started",
        "program": program,
        "argv": argv,
        "env": env,
    })
}

/// Audit: launch_started (right before handing control to the launcher).
pub fn audit_launch_started<I, K, V>(program: &str, argv: &[String], env: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    if let Some(path) = ObservabilityConfig::from_env().audit_log.as_deref() {
        append_jsonl(Path::new(path), &launch_record(program, argv, env));
    }
}

fn append_jsonl(path: &Path, record: &Value) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_record_fields() {
        let argv = vec!["mpirun".to_string(), "-n".to_string(), "2".to_string()];
        let record = launch_record(
            "/opt/ompi/bin/prterun",
            &argv,
            [("OMPI_TOOL_NAME", "mpirun"), ("OMPI_MCA_PREFIXES", "mca,opal,ompi")],
        );
        assert_eq!(record["event"], "launch_started");
        assert_eq!(record["program"], "/opt/ompi/bin/prterun");
        assert_eq!(record["argv"][1], "-n");
        assert_eq!(record["env"]["OMPI_TOOL_NAME"], "mpirun");
        assert!(record["ts"].as_str().is_some());
    }

    #[test]
    fn test_append_jsonl_creates_parent_and_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("audit").join("launch.jsonl");
        append_jsonl(&path, &json!({"n": 1}));
        append_jsonl(&path, &json!({"n": 2}));
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec![r#"{"n":1}"#, r#"{"n":2}"#]);
    }

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
