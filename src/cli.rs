//! CLI arguments and subcommands for pm2-recover.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "pm2-recover",
    about = "Reconstructs pm2 start commands from a dump.pm2 snapshot",
    long_about = "Reconstructs pm2 start commands from a dump.pm2 snapshot.\n\n\
                  Reads a process-manager snapshot and emits, per process, the shell \
                  commands that re-register it after the daemon's process table has \
                  been lost: launch-pattern detection, argument quoting, path \
                  relativization and stopped-state restoration.",
    author = "Michael Moll <tools@herakles.now> - Herakles",
    version = "0.1.0",
    propagate_version = true,
    after_help = "Project: https://github.com/cansp-dev/pm2-recover — More info: https://www.herakles.now — Support: tools@herakles.now"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the pm2 snapshot file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Write the recovery script to a file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Abort the whole run on the first process that cannot be reconstructed
    #[arg(long)]
    pub fail_fast: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long)]
    pub no_config: bool,

    /// Print effective merged config and exit
    #[arg(long)]
    pub show_config: bool,

    /// Output format for --show-config
    #[arg(long, value_enum, default_value = "yaml")]
    pub config_format: ConfigFormat,

    /// Validate config and exit (return code 1 on error)
    #[arg(long)]
    pub check_config: bool,
}

/// Subcommands for additional functionality
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a snapshot file without emitting commands
    Check {
        /// Path to the pm2 snapshot file
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,
    },

    /// Generate configuration files
    Config {
        /// Output file path
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },

    /// Generate a synthetic snapshot JSON file
    GenerateTestdata {
        /// Output file path
        #[arg(short = 'o', long, default_value = "testdata-dump.json")]
        output: PathBuf,

        /// Number of processes to generate
        #[arg(long, default_value_t = 12)]
        count: usize,

        /// Fraction of generated processes dumped in the stopped state
        #[arg(long, default_value_t = 0.25)]
        stopped_ratio: f64,
    },
}
