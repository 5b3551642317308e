//! Shell quoting and display-path helpers shared by the synthesizer.
//!
//! Quoting is a plain single-quote wrap with no internal escaping; snapshot
//! contents are treated as trusted dump data. Tokens containing an embedded
//! single quote are flagged by the orchestrating loop, not rewritten here.

use std::path::{Path, MAIN_SEPARATOR};

/// Wraps a token in single quotes as one atomic shell word.
pub fn single_quote(token: &str) -> String {
    format!("'{token}'")
}

/// Quotes each token and joins them with single spaces.
pub fn join_quoted(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| single_quote(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders an executable path for the reconstructed command.
///
/// Paths under `cwd` are relativized and prefixed with `./`. The comparison
/// is by path components, never the filesystem: the dumped layout may no
/// longer exist at recovery time. Anything else passes through unchanged.
pub fn display_path(exec_path: &str, cwd: &str) -> String {
    match Path::new(exec_path).strip_prefix(cwd) {
        Ok(relative) => format!(".{}{}", MAIN_SEPARATOR, relative.display()),
        Err(_) => exec_path.to_string(),
    }
}
