//! Core state machine types.
//!
//! This module contains the pure building blocks the game is assembled from:
//! - Status definitions via the `State` trait
//! - Guard predicates that gate commands
//! - Immutable history of status changes
//!
//! Nothing in here performs I/O or reads a clock other than through values
//! handed in by the caller.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
