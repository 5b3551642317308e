//! Configuration management for pm2-recover.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default snapshot locations, checked in order when neither the CLI nor the
/// config file names one.
pub const DEFAULT_SNAPSHOT_LOCATIONS: [&str; 2] = ["./dump.pm2", "~/.pm2/dump.pm2"];

/// Enhanced configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot input file
    #[serde(alias = "snapshot-file")]
    pub snapshot_file: Option<PathBuf>,

    /// Recovery script output file (unset = stdout)
    pub output: Option<PathBuf>,

    /// Abort the run on the first per-process reconstruction error
    #[serde(alias = "fail-fast")]
    pub fail_fast: Option<bool>,

    // Logging
    #[serde(alias = "log-level")]
    pub log_level: Option<String>,
}

/// Validate effective config (used by --check-config and at startup)
pub fn validate_effective_config(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // The emitted script must never clobber its own input
    if let (Some(snapshot), Some(output)) = (&cfg.snapshot_file, &cfg.output) {
        if snapshot == output {
            return Err(format!(
                "output path {} would overwrite the snapshot file",
                output.display()
            )
            .into());
        }
    }

    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(format!(
                    "Invalid log_level '{}', expected off/error/warn/info/debug/trace",
                    other
                )
                .into());
            }
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref().and_then(|p| p.to_str()))?
    };

    // Override with CLI args
    if let Some(file) = &args.file {
        config.snapshot_file = Some(file.clone());
    }

    if let Some(output) = &args.output {
        config.output = Some(output.clone());
    }

    if args.fail_fast {
        config.fail_fast = Some(true);
    }

    Ok(config)
}

/// Enhanced configuration loading with multiple format support
pub fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        // Try default locations
        let defaults = [
            "/etc/pm2-recover/config.yaml",
            "/etc/pm2-recover/config.yml",
            "/etc/pm2-recover/config.json",
            "./pm2-recover.yaml",
            "./pm2-recover.yml",
            "./pm2-recover.json",
        ];

        defaults
            .iter()
            .find(|p| Path::new(p).exists())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(""))
    };

    if !path.exists() || path.to_string_lossy().is_empty() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;

    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => {
            let config: Config = serde_json::from_str(&content)?;
            info!("Loaded JSON configuration from: {}", path.display());
            Ok(config)
        }
        Some("toml") => {
            let config: Config = toml::from_str(&content)?;
            info!("Loaded TOML configuration from: {}", path.display());
            Ok(config)
        }
        _ => {
            // Default to YAML
            let config: Config = serde_yaml::from_str(&content)?;
            info!("Loaded YAML configuration from: {}", path.display());
            Ok(config)
        }
    }
}

/// Resolves the snapshot path: CLI/config value first, then the default
/// locations, falling back to `./dump.pm2` so the loader reports it.
pub fn resolve_snapshot_path(cfg: &Config) -> PathBuf {
    if let Some(path) = &cfg.snapshot_file {
        return path.clone();
    }

    DEFAULT_SNAPSHOT_LOCATIONS
        .iter()
        .map(|p| expand_home(p))
        .find(|p| p.exists())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_LOCATIONS[0]))
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

/// Shows configuration in requested format
pub fn show_config(config: &Config, format: ConfigFormat) -> Result<(), Box<dyn std::error::Error>> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };

    println!("{output}");
    Ok(())
}
