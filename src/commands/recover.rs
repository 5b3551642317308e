//! Recover command implementation.
//!
//! The default action: loads the snapshot, classifies every descriptor,
//! synthesizes its recovery plan and writes the assembled script.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use tracing::{debug, error, warn};

use pm2_recover::recover::{classify, synthesize};
use pm2_recover::snapshot::{load_snapshot, ProcessDescriptor};

use crate::config::{resolve_snapshot_path, Config};

/// Loads the snapshot and writes the recovery script.
///
/// Per-process reconstruction errors are reported and skipped so the rest
/// of the snapshot still recovers; `fail_fast` switches to abort-on-first.
/// A run with any failed process exits with code 1.
pub fn command_recover(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot_path = resolve_snapshot_path(config);
    let descriptors = load_snapshot(&snapshot_path)?;

    debug!(
        "Reconstructing commands for {} process(es)",
        descriptors.len()
    );

    let fail_fast = config.fail_fast.unwrap_or(false);
    let mut script = script_header(&snapshot_path);
    let mut failed = 0usize;

    for descriptor in &descriptors {
        let variant = classify(descriptor);
        debug!("process '{}' classified as {}", descriptor.name, variant);

        match synthesize(descriptor, variant) {
            Ok(plan) => {
                warn_on_embedded_quotes(descriptor);
                script.push_str(&format!("\n# {}\n", descriptor.name));
                script.push_str(&plan.to_string());
            }
            Err(e) => {
                error!("skipping process '{}': {}", descriptor.name, e);
                failed += 1;
                if fail_fast {
                    return Err(e.into());
                }
            }
        }
    }

    write_script(config.output.as_deref(), &script)?;

    if failed > 0 {
        eprintln!(
            "❌ {} of {} process(es) could not be reconstructed",
            failed,
            descriptors.len()
        );
        std::process::exit(1);
    }

    Ok(())
}

/// Comment header naming the tool, the snapshot and the generation time.
fn script_header(snapshot_path: &Path) -> String {
    format!(
        "# pm2 recovery script\n# snapshot: {}\n# generated: {}\n",
        snapshot_path.display(),
        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

/// Single-quote wrapping cannot carry an embedded single quote; the line is
/// still emitted verbatim, flagged for manual review.
fn warn_on_embedded_quotes(descriptor: &ProcessDescriptor) {
    if descriptor.args.iter().any(|arg| arg.contains('\'')) {
        warn!(
            "process '{}': argument contains a single quote; review the emitted line before replaying",
            descriptor.name
        );
    }
}

fn write_script(output: Option<&Path>, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            fs::write(path, script)?;
            println!("✅ Recovery script written to: {}", path.display());
        }
        None => {
            io::stdout().write_all(script.as_bytes())?;
        }
    }
    Ok(())
}
