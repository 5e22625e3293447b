//! Errors raised while assembling a game machine.

use crate::policy::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building a machine or loading its config.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid game configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    #[error("failed to parse game configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn describe(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
