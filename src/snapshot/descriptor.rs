//! Process descriptor model for pm2 snapshot entries.
//!
//! Field names follow the keys pm2 writes into `dump.pm2`; the Rust-side
//! names stay short (`cwd`, `exec_path`) with serde renames bridging the two.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a process at dump time.
///
/// Only `Stopped` influences command synthesis; every other status recovers
/// as a plain running process. Statuses introduced by future pm2 versions
/// fold into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessStatus {
    Online,
    Launching,
    Stopping,
    Stopped,
    Errored,
    OneLaunchStatus,
    #[serde(other)]
    Unknown,
}

impl ProcessStatus {
    pub fn is_stopped(self) -> bool {
        self == ProcessStatus::Stopped
    }
}

/// One process record inside the supervisor's snapshot.
///
/// All six fields are required; the loader rejects entries missing any of
/// them before they reach classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub name: String,
    #[serde(rename = "pm_cwd")]
    pub cwd: String,
    #[serde(rename = "pm_exec_path")]
    pub exec_path: String,
    pub status: ProcessStatus,
    pub args: Vec<String>,
    pub watch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_pm2_vocabulary() {
        let status: ProcessStatus = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(status, ProcessStatus::Online);

        let status: ProcessStatus = serde_json::from_str("\"one-launch-status\"").unwrap();
        assert_eq!(status, ProcessStatus::OneLaunchStatus);
    }

    #[test]
    fn test_unknown_status_folds_into_unknown() {
        let status: ProcessStatus = serde_json::from_str("\"waiting-restart\"").unwrap();
        assert_eq!(status, ProcessStatus::Unknown);
        assert!(!status.is_stopped());
    }

    #[test]
    fn test_descriptor_maps_dump_keys() {
        let json = r#"{
            "name": "api",
            "pm_cwd": "/srv/api",
            "pm_exec_path": "/srv/api/server.js",
            "status": "stopped",
            "args": ["--port", "8080"],
            "watch": true
        }"#;

        let descriptor: ProcessDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.cwd, "/srv/api");
        assert_eq!(descriptor.exec_path, "/srv/api/server.js");
        assert!(descriptor.status.is_stopped());
        assert!(descriptor.watch);
    }
}
