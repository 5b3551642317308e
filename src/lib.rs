//! pm2 Snapshot Recovery Library
//!
//! This library reconstructs the shell commands needed to re-register pm2
//! processes from a `dump.pm2` snapshot after the daemon's in-memory process
//! table has been lost. It is I/O-free apart from the snapshot loader, so
//! downstream tooling can embed the engine without pulling in the CLI shell.
//!
//! # Features
//!
//! - **Launch-Pattern Classification**: shell-wrapped, version-managed
//!   runtime, or direct execution, decided per descriptor
//! - **Command Synthesis**: deterministic `cd` / `pm2 start` / `pm2 stop`
//!   line sequences with argument quoting and path relativization
//! - **Snapshot Loading**: dump-file parsing with per-key validation
//!
//! # Usage
//!
//! ```rust
//! use pm2_recover::recover::{classify, synthesize};
//! use pm2_recover::snapshot::{ProcessDescriptor, ProcessStatus};
//!
//! let descriptor = ProcessDescriptor {
//!     name: "api".into(),
//!     cwd: "/srv/api".into(),
//!     exec_path: "/srv/api/server.js".into(),
//!     status: ProcessStatus::Online,
//!     args: vec!["--port".into(), "8080".into()],
//!     watch: false,
//! };
//!
//! let variant = classify(&descriptor);
//! let plan = synthesize(&descriptor, variant).unwrap();
//!
//! assert_eq!(plan.lines[0], "cd \"/srv/api\"");
//! for line in &plan.lines {
//!     println!("{line}");
//! }
//! ```

pub mod error;
pub mod recover;
pub mod snapshot;

// Re-export main types for convenience
pub use error::{SnapshotError, SynthesisError};
pub use recover::{classify, synthesize, InvocationVariant, RecoveryPlan};
pub use snapshot::{load_snapshot, ProcessDescriptor, ProcessStatus};
