//! Descriptor classification and command synthesis.
//!
//! This module provides:
//! - `classifier`: assigns each descriptor to an invocation variant
//! - `synthesizer`: rebuilds the launch commands for a classified descriptor
//! - `quote`: shell quoting and display-path helpers

pub mod classifier;
pub mod quote;
pub mod synthesizer;

// Re-export commonly used types
pub use classifier::{classify, InvocationVariant};
pub use quote::{display_path, join_quoted, single_quote};
pub use synthesizer::{synthesize, RecoveryPlan};
