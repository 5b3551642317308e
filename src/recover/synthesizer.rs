//! Recovery command synthesis.
//!
//! Given a descriptor and its classified variant, produces the ordered
//! shell lines that re-register the process: a directory change, a
//! `pm2 start` line and, for stopped processes, a trailing `pm2 stop`.

use std::fmt;

use crate::error::SynthesisError;
use crate::recover::classifier::InvocationVariant;
use crate::recover::quote::{display_path, join_quoted, single_quote};
use crate::snapshot::ProcessDescriptor;

/// Ordered shell command lines recreating one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryPlan {
    pub lines: Vec<String>,
}

impl fmt::Display for RecoveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Rebuilds the launch commands for one classified descriptor.
///
/// Deterministic: identical input always yields the identical line
/// sequence. Fails only on a contract violation, i.e. the argument vector
/// lacks data the variant's reconstruction rule requires.
pub fn synthesize(
    descriptor: &ProcessDescriptor,
    variant: InvocationVariant,
) -> Result<RecoveryPlan, SynthesisError> {
    let mut lines = Vec::with_capacity(3);

    // Working directory first; double quotes, contents verbatim.
    lines.push(format!("cd \"{}\"", descriptor.cwd));
    lines.push(start_line(descriptor, variant)?);

    // Replaying the start line necessarily brings the process up running;
    // an explicit stop restores the dumped state.
    if descriptor.status.is_stopped() {
        lines.push(format!("pm2 stop {}", descriptor.name));
    }

    Ok(RecoveryPlan { lines })
}

/// Builds the `pm2 start` line for the given variant.
fn start_line(
    descriptor: &ProcessDescriptor,
    variant: InvocationVariant,
) -> Result<String, SynthesisError> {
    let mut line = format!("pm2 start --name {}", descriptor.name);

    if descriptor.watch {
        line.push_str(" --watch");
    }

    match variant {
        InvocationVariant::ShellWrapped => {
            // args[0] is the "-c" marker and pm_exec_path is the wrapping
            // shell; args[1] holds the full command line and is the only
            // token that survives reconstruction, as one indivisible word.
            let command = require_arg(descriptor, variant, 1)?;
            line.push_str(" -- ");
            line.push_str(&single_quote(command));
        }
        InvocationVariant::VersionManagedRuntime => {
            // The short runtime name in args[0] replaces the resolved
            // absolute interpreter path as the launch target.
            let runtime = require_arg(descriptor, variant, 0)?;
            line.push(' ');
            line.push_str(&single_quote(runtime));

            let trailing = &descriptor.args[1..];
            if !trailing.is_empty() {
                line.push_str(" -- ");
                line.push_str(&join_quoted(trailing));
            }
        }
        InvocationVariant::DirectExecution => {
            let target = display_path(&descriptor.exec_path, &descriptor.cwd);
            line.push(' ');
            line.push_str(&single_quote(&target));

            if !descriptor.args.is_empty() {
                line.push_str(" -- ");
                line.push_str(&join_quoted(&descriptor.args));
            }
        }
    }

    Ok(line)
}

fn require_arg<'a>(
    descriptor: &'a ProcessDescriptor,
    variant: InvocationVariant,
    index: usize,
) -> Result<&'a str, SynthesisError> {
    descriptor
        .args
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| SynthesisError::MissingArgument {
            name: descriptor.name.clone(),
            variant,
            index,
            len: descriptor.args.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ProcessStatus;
    use std::path::MAIN_SEPARATOR;

    fn descriptor(
        name: &str,
        cwd: &str,
        exec_path: &str,
        status: ProcessStatus,
        args: &[&str],
        watch: bool,
    ) -> ProcessDescriptor {
        ProcessDescriptor {
            name: name.to_string(),
            cwd: cwd.to_string(),
            exec_path: exec_path.to_string(),
            status,
            args: args.iter().map(|a| a.to_string()).collect(),
            watch,
        }
    }

    #[test]
    fn test_shell_wrapped_plan() {
        let d = descriptor(
            "shell-app",
            "/var/www/html",
            "/usr/bin/npm",
            ProcessStatus::Online,
            &["-c", "npm run start:prod"],
            false,
        );

        let plan = synthesize(&d, InvocationVariant::ShellWrapped).unwrap();
        assert_eq!(
            plan.lines,
            vec![
                "cd \"/var/www/html\"".to_string(),
                "pm2 start --name shell-app -- 'npm run start:prod'".to_string(),
            ]
        );
    }

    #[test]
    fn test_version_managed_plan() {
        let d = descriptor(
            "nvm-app",
            "/home/user/backend",
            "/home/user/.nvm/versions/node/v18.0.0/bin/node",
            ProcessStatus::Online,
            &["node", "dist/server.js"],
            false,
        );

        let plan = synthesize(&d, InvocationVariant::VersionManagedRuntime).unwrap();
        assert_eq!(plan.lines[0], "cd \"/home/user/backend\"");
        assert_eq!(
            plan.lines[1],
            "pm2 start --name nvm-app 'node' -- 'dist/server.js'"
        );
        assert_eq!(plan.lines.len(), 2);
    }

    #[test]
    fn test_direct_execution_relativizes_watches_and_stops() {
        let d = descriptor(
            "direct-app",
            "/home/user/app",
            "/home/user/app/index.js",
            ProcessStatus::Stopped,
            &["--port", "3000"],
            true,
        );

        let plan = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        assert_eq!(plan.lines[0], "cd \"/home/user/app\"");
        assert_eq!(
            plan.lines[1],
            format!(
                "pm2 start --name direct-app --watch '.{}index.js' -- '--port' '3000'",
                MAIN_SEPARATOR
            )
        );
        assert_eq!(plan.lines[2], "pm2 stop direct-app");
    }

    #[test]
    fn test_direct_execution_outside_cwd_keeps_absolute_path() {
        let d = descriptor(
            "worker",
            "/srv/jobs",
            "/usr/local/lib/worker.js",
            ProcessStatus::Online,
            &[],
            false,
        );

        let plan = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        assert_eq!(
            plan.lines[1],
            "pm2 start --name worker '/usr/local/lib/worker.js'"
        );
    }

    #[test]
    fn test_version_managed_single_argument_has_no_separator() {
        let d = descriptor(
            "repl",
            "/home/user",
            "/home/user/.nvm/versions/node/v20.1.0/bin/node",
            ProcessStatus::Online,
            &["node"],
            false,
        );

        let plan = synthesize(&d, InvocationVariant::VersionManagedRuntime).unwrap();
        assert_eq!(plan.lines[1], "pm2 start --name repl 'node'");
    }

    #[test]
    fn test_watch_flag_sits_between_name_and_target() {
        let d = descriptor(
            "watched",
            "/srv/site",
            "/srv/site/app.js",
            ProcessStatus::Online,
            &[],
            true,
        );

        let plan = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        assert!(plan.lines[1].starts_with("pm2 start --name watched --watch "));
    }

    #[test]
    fn test_no_watch_flag_when_disabled() {
        let d = descriptor(
            "plain",
            "/srv/site",
            "/srv/site/app.js",
            ProcessStatus::Online,
            &[],
            false,
        );

        let plan = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        assert!(!plan.lines[1].contains("--watch"));
    }

    #[test]
    fn test_non_stopped_statuses_have_no_stop_line() {
        for status in [
            ProcessStatus::Online,
            ProcessStatus::Launching,
            ProcessStatus::Errored,
            ProcessStatus::Unknown,
        ] {
            let d = descriptor("svc", "/srv", "/srv/app.js", status, &[], false);
            let plan = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
            assert!(
                !plan.lines.iter().any(|l| l.starts_with("pm2 stop")),
                "status {status:?} must not emit a stop line"
            );
        }
    }

    #[test]
    fn test_shell_wrapped_missing_command_is_contract_violation() {
        let d = descriptor(
            "broken",
            "/srv",
            "/bin/bash",
            ProcessStatus::Online,
            &["-c"],
            false,
        );

        let err = synthesize(&d, InvocationVariant::ShellWrapped).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"), "error should name the process: {message}");
        assert!(message.contains("args[1]"), "error should name the missing field: {message}");
    }

    #[test]
    fn test_version_managed_empty_args_is_contract_violation() {
        let d = descriptor(
            "broken",
            "/srv",
            "/home/u/.nvm/versions/node/v18.0.0/bin/node",
            ProcessStatus::Online,
            &[],
            false,
        );

        assert!(synthesize(&d, InvocationVariant::VersionManagedRuntime).is_err());
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let d = descriptor(
            "same",
            "/srv/app",
            "/srv/app/main.js",
            ProcessStatus::Stopped,
            &["--flag"],
            true,
        );

        let first = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        let second = synthesize(&d, InvocationVariant::DirectExecution).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_renders_lines_in_order() {
        let plan = RecoveryPlan {
            lines: vec!["cd \"/srv\"".to_string(), "pm2 start --name x 'a'".to_string()],
        };
        assert_eq!(plan.to_string(), "cd \"/srv\"\npm2 start --name x 'a'\n");
    }
}
