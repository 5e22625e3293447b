//! Builder API for assembling game machines.
//!
//! [`GameBuilder`] validates the configuration before any machine exists, and
//! [`state_enum!`](crate::state_enum) declares the status enums the machine
//! reports.

pub mod error;
pub mod machine;
#[macro_use]
pub mod macros;

pub use error::BuildError;
pub use machine::GameBuilder;
