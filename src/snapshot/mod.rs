//! Snapshot model and loading for pm2 dump files.
//!
//! This module provides:
//! - `descriptor`: the process record and status vocabulary
//! - `loader`: dump-file reading with per-key validation

pub mod descriptor;
pub mod loader;

// Re-export commonly used types
pub use descriptor::{ProcessDescriptor, ProcessStatus};
pub use loader::{load_snapshot, REQUIRED_KEYS};
