//! Launch-pattern classification for snapshot descriptors.
//!
//! pm2 resolves the real interpreter path at launch time and discards the
//! command the user actually typed. Classification reverses that: the
//! argument vector's literal shell marker and the filesystem layout of the
//! executable path decide which invocation style produced the descriptor.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::snapshot::ProcessDescriptor;

/// Path fragment left behind by per-user runtime version managers.
/// nvm installs interpreters under `.../nvm/versions/node/v18.0.0/bin/node`
/// and nodenv under `.../.nodenv/versions/18.0.0/bin/node`; both carry a
/// `versions/<runtime>` segment pair that system-wide installs do not.
static VERSION_MANAGER_FRAGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[/\\]versions[/\\][^/\\]+[/\\]").expect("invalid version-manager pattern")
});

/// Invocation style that produced a snapshot descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvocationVariant {
    /// Launched via a shell with an inline command string (`args[0] == "-c"`).
    ShellWrapped,
    /// Launched through a version-manager interpreter install using a bare
    /// command name (`args[0]`) instead of the resolved absolute path.
    VersionManagedRuntime,
    /// Launched by executing the executable path directly.
    DirectExecution,
}

impl fmt::Display for InvocationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvocationVariant::ShellWrapped => "shell-wrapped",
            InvocationVariant::VersionManagedRuntime => "version-managed runtime",
            InvocationVariant::DirectExecution => "direct execution",
        };
        f.write_str(label)
    }
}

/// Assigns a descriptor to exactly one invocation variant.
///
/// First match wins: the `-c` shell marker takes precedence over the
/// executable path, since a shell-wrapped launch can point `pm_exec_path`
/// at anything.
pub fn classify(descriptor: &ProcessDescriptor) -> InvocationVariant {
    if descriptor.args.first().map(String::as_str) == Some("-c") {
        return InvocationVariant::ShellWrapped;
    }

    if VERSION_MANAGER_FRAGMENT.is_match(&descriptor.exec_path) {
        return InvocationVariant::VersionManagedRuntime;
    }

    InvocationVariant::DirectExecution
}
