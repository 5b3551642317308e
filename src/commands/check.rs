//! Check command implementation.
//!
//! Validates a snapshot file without emitting any commands.

use ahash::AHashMap as HashMap;
use std::path::PathBuf;

use pm2_recover::recover::{classify, synthesize, InvocationVariant};
use pm2_recover::snapshot::load_snapshot;

use crate::config::{resolve_snapshot_path, Config};

/// Validates a snapshot file and reports what a recovery run would do.
pub fn command_check(
    file: Option<PathBuf>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 pm2-recover - Snapshot Check");
    println!("================================");

    let snapshot_path = match file {
        Some(path) => path,
        None => resolve_snapshot_path(config),
    };

    let mut all_ok = true;

    println!("\n📁 Checking snapshot file...");
    println!("   Path: {}", snapshot_path.display());

    let descriptors = match load_snapshot(&snapshot_path) {
        Ok(descriptors) => {
            println!("   ✅ {} process entries loaded", descriptors.len());
            descriptors
        }
        Err(e) => {
            println!("   ❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("\n📊 Classifying entries...");
    let mut counts: HashMap<InvocationVariant, usize> = HashMap::new();
    for descriptor in &descriptors {
        *counts.entry(classify(descriptor)).or_default() += 1;
    }
    for variant in [
        InvocationVariant::ShellWrapped,
        InvocationVariant::VersionManagedRuntime,
        InvocationVariant::DirectExecution,
    ] {
        println!(
            "   {} × {}",
            counts.get(&variant).copied().unwrap_or(0),
            variant
        );
    }

    println!("\n🔎 Checking process names...");
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for descriptor in &descriptors {
        *seen.entry(descriptor.name.as_str()).or_default() += 1;
    }
    let mut duplicates = 0;
    for (name, count) in seen.iter().filter(|(_, count)| **count > 1) {
        println!(
            "   ❌ name '{}' appears {} times; pm2 names must be unique",
            name, count
        );
        duplicates += 1;
    }
    if duplicates == 0 {
        println!("   ✅ All names unique");
    } else {
        all_ok = false;
    }

    println!("\n🛠  Checking reconstruction...");
    let mut failed = 0;
    for descriptor in &descriptors {
        if let Err(e) = synthesize(descriptor, classify(descriptor)) {
            println!("   ❌ {}", e);
            failed += 1;
        }
    }
    if failed == 0 {
        println!("   ✅ All entries reconstructable");
    } else {
        all_ok = false;
    }

    println!("\n📋 Summary:");
    if all_ok {
        println!("   ✅ Snapshot is ready for recovery");
        Ok(())
    } else {
        println!("   ❌ Some checks failed - please review warnings");
        std::process::exit(1);
    }
}
