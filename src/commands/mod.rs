//! CLI command implementations for pm2-recover.
//!
//! This module provides implementations for all CLI subcommands:
//! - `check`: Snapshot validation
//! - `config`: Configuration file generation
//! - `generate`: Test snapshot generation
//! - `recover`: Recovery script assembly (the default action)

pub mod check;
pub mod config;
pub mod generate;
pub mod recover;

// Re-export command functions
pub use check::command_check;
pub use config::command_config;
pub use generate::command_generate_testdata;
pub use recover::command_recover;
