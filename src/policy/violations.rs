//! Configuration rule violations.

use thiserror::Error;

/// One configuration rule that does not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("bonus threshold must be greater than zero")]
    ZeroThreshold,

    #[error("round increment must be greater than zero")]
    ZeroIncrement,

    #[error("bonus threshold {threshold} is not reachable in steps of {increment}")]
    UnreachableThreshold { threshold: u32, increment: u32 },

    #[error("duration '{name}' must be greater than zero")]
    ZeroDuration { name: &'static str },
}
