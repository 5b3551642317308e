//! Error taxonomy for pm2-recover.
//!
//! Two layers of failure are distinguished: snapshot-level errors that abort
//! the whole run (missing file, unparsable JSON, missing required keys) and
//! per-descriptor synthesis errors that only affect one process entry.

use crate::recover::InvocationVariant;

/// Errors raised while loading and validating a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Error processing file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error processing file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error processing file {path}: snapshot root must be a JSON array")]
    NotAnArray { path: String },

    #[error("process '{descriptor}' is missing required key '{key}'")]
    MissingKey {
        descriptor: String,
        key: &'static str,
    },

    #[error("process entry #{index} has an empty 'name'")]
    EmptyName { index: usize },

    #[error("process '{descriptor}' has an invalid field: {source}")]
    InvalidEntry {
        descriptor: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Contract violation raised when a descriptor lacks the data its classified
/// variant needs. Aborts the one descriptor, never the run.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("process '{name}': {variant} reconstruction requires args[{index}], but only {len} argument(s) are present")]
    MissingArgument {
        name: String,
        variant: InvocationVariant,
        index: usize,
        len: usize,
    },
}
