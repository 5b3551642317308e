//! Generate testdata command implementation.
//!
//! Generates synthetic snapshot JSON files covering every launch pattern,
//! for exercising the recovery pipeline without a real pm2 install.

use rand::Rng;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use pm2_recover::snapshot::{ProcessDescriptor, ProcessStatus};

/// Generates a synthetic snapshot JSON file.
pub fn command_generate_testdata(
    output: PathBuf,
    count: usize,
    stopped_ratio: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!(
        "Generating test snapshot: count={}, stopped_ratio={}, output={}",
        count,
        stopped_ratio,
        output.display()
    );

    let mut rng = rand::thread_rng();
    let mut descriptors = Vec::with_capacity(count);

    for index in 0..count {
        let status = if rng.gen_bool(stopped_ratio.clamp(0.0, 1.0)) {
            ProcessStatus::Stopped
        } else {
            ProcessStatus::Online
        };
        let watch = rng.gen_bool(0.3);

        // Cycle through the three launch patterns so every snapshot
        // exercises the full classifier
        let descriptor = match index % 3 {
            0 => shell_wrapped_process(&mut rng, index, status, watch),
            1 => version_managed_process(&mut rng, index, status, watch),
            _ => direct_process(&mut rng, index, status, watch),
        };

        descriptors.push(descriptor);
    }

    let json_content = serde_json::to_string_pretty(&descriptors)?;
    fs::write(&output, &json_content)?;

    println!(
        "✅ Generated test snapshot: {} processes in {}",
        descriptors.len(),
        output.display()
    );

    Ok(())
}

/// Process launched through a shell with an inline command string.
fn shell_wrapped_process(
    rng: &mut impl Rng,
    index: usize,
    status: ProcessStatus,
    watch: bool,
) -> ProcessDescriptor {
    let port: u16 = rng.gen_range(3000..9000);

    ProcessDescriptor {
        name: format!("shell-app-{}", index + 1),
        cwd: format!("/var/www/site-{}", index + 1),
        exec_path: "/bin/bash".to_string(),
        status,
        args: vec![
            "-c".to_string(),
            format!("npm run start -- --port {port}"),
        ],
        watch,
    }
}

/// Process launched through an nvm-style interpreter install.
fn version_managed_process(
    rng: &mut impl Rng,
    index: usize,
    status: ProcessStatus,
    watch: bool,
) -> ProcessDescriptor {
    let major: u8 = rng.gen_range(16..23);
    let minor: u8 = rng.gen_range(0..10);

    ProcessDescriptor {
        name: format!("nvm-app-{}", index + 1),
        cwd: format!("/home/deploy/service-{}", index + 1),
        exec_path: format!("/home/deploy/.nvm/versions/node/v{major}.{minor}.0/bin/node"),
        status,
        args: vec!["node".to_string(), "dist/server.js".to_string()],
        watch,
    }
}

/// Process launched by executing its script path directly.
fn direct_process(
    rng: &mut impl Rng,
    index: usize,
    status: ProcessStatus,
    watch: bool,
) -> ProcessDescriptor {
    let port: u16 = rng.gen_range(3000..9000);
    let cwd = format!("/srv/app-{}", index + 1);

    ProcessDescriptor {
        name: format!("direct-app-{}", index + 1),
        exec_path: format!("{cwd}/index.js"),
        cwd,
        status,
        args: vec!["--port".to_string(), port.to_string()],
        watch,
    }
}
