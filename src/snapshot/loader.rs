//! Snapshot file loading and validation.
//!
//! Entries are checked for the six required keys before serde
//! deserialization so a malformed entry is reported with the specific key
//! it lacks, identified by its process name (or index when the name itself
//! is missing).

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::SnapshotError;
use crate::snapshot::ProcessDescriptor;

/// JSON keys every snapshot entry must carry.
pub const REQUIRED_KEYS: [&str; 6] = ["name", "pm_cwd", "pm_exec_path", "status", "args", "watch"];

/// Loads a pm2 snapshot file into validated descriptors, preserving entry
/// order.
pub fn load_snapshot(path: &Path) -> Result<Vec<ProcessDescriptor>, SnapshotError> {
    debug!("Loading snapshot from: {}", path.display());

    if !path.exists() {
        return Err(SnapshotError::NotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    let entries = root.as_array().ok_or_else(|| SnapshotError::NotAnArray {
        path: path.display().to_string(),
    })?;

    let descriptors = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| descriptor_from_value(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Loaded {} descriptor(s) from {}",
        descriptors.len(),
        path.display()
    );

    Ok(descriptors)
}

/// Validates one snapshot entry and deserializes it.
fn descriptor_from_value(index: usize, entry: &Value) -> Result<ProcessDescriptor, SnapshotError> {
    let label = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"));

    for key in REQUIRED_KEYS {
        if entry.get(key).is_none() {
            return Err(SnapshotError::MissingKey {
                descriptor: label,
                key,
            });
        }
    }

    if entry.get("name").and_then(Value::as_str) == Some("") {
        return Err(SnapshotError::EmptyName { index });
    }

    serde_json::from_value(entry.clone()).map_err(|source| SnapshotError::InvalidEntry {
        descriptor: label,
        source,
    })
}
