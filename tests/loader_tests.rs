//! Integration tests for snapshot loading failures.
//!
//! The loader owns the file-level error taxonomy: missing file, unparsable
//! JSON, and entries missing a required key. Each failure message carries
//! enough context to identify the offending file or process.

use std::fs;

use pm2_recover::error::SnapshotError;
use pm2_recover::snapshot::{load_snapshot, ProcessStatus};
use tempfile::TempDir;

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::NotFound { .. }));
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid.json");
    fs::write(&path, "{ this is not json }").unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Parse { .. }));
    assert!(err.to_string().contains("Error processing file"));
}

#[test]
fn test_non_array_root_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("object.json");
    fs::write(&path, r#"{"name": "app1"}"#).unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::NotAnArray { .. }));
    assert!(err.to_string().contains("Error processing file"));
}

#[test]
fn test_missing_required_key_names_the_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-keys.json");
    fs::write(&path, r#"[{"name": "app1"}]"#).unwrap();

    let err = load_snapshot(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing required key"));
    assert!(message.contains("app1"), "message should name the process: {message}");
    assert!(message.contains("pm_cwd"), "first absent key should be named: {message}");
}

#[test]
fn test_missing_name_falls_back_to_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("anonymous.json");
    fs::write(&path, r#"[{"pm_cwd": "/srv"}]"#).unwrap();

    let err = load_snapshot(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("missing required key"));
    assert!(message.contains("#0"), "entry should be identified by index: {message}");
}

#[test]
fn test_empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty-name.json");
    fs::write(
        &path,
        r#"[
            {
                "name": "",
                "pm_cwd": "/srv",
                "pm_exec_path": "/srv/app.js",
                "status": "online",
                "args": [],
                "watch": false
            }
        ]"#,
    )
    .unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::EmptyName { index: 0 }));
}

#[test]
fn test_mistyped_field_is_an_invalid_entry() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mistyped.json");
    fs::write(
        &path,
        r#"[
            {
                "name": "app1",
                "pm_cwd": "/srv",
                "pm_exec_path": "/srv/app.js",
                "status": "online",
                "args": [],
                "watch": "yes"
            }
        ]"#,
    )
    .unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidEntry { .. }));
    assert!(err.to_string().contains("app1"));
}

#[test]
fn test_well_formed_snapshot_loads_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("good.json");
    fs::write(
        &path,
        r#"[
            {
                "name": "api",
                "pm_cwd": "/srv/api",
                "pm_exec_path": "/srv/api/server.js",
                "status": "online",
                "args": ["--port", "8080"],
                "watch": false
            },
            {
                "name": "worker",
                "pm_cwd": "/srv/worker",
                "pm_exec_path": "/srv/worker/run.js",
                "status": "stopped",
                "args": [],
                "watch": true
            }
        ]"#,
    )
    .unwrap();

    let descriptors = load_snapshot(&path).unwrap();
    assert_eq!(descriptors.len(), 2);
    assert_eq!(descriptors[0].name, "api");
    assert_eq!(descriptors[0].args, vec!["--port", "8080"]);
    assert_eq!(descriptors[1].name, "worker");
    assert_eq!(descriptors[1].status, ProcessStatus::Stopped);
    assert!(descriptors[1].watch);
}

#[test]
fn test_empty_snapshot_is_valid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "[]").unwrap();

    let descriptors = load_snapshot(&path).unwrap();
    assert!(descriptors.is_empty());
}
