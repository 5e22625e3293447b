//! The imperative shell around the pure game rules.
//!
//! [`GameRules`](crate::game::GameRules) only describes what should happen
//! as a list of [`Effect`] values. [`GameMachine`] owns the current state and
//! carries those effects out against a
//! [`SignalBroadcaster`](crate::broadcast::SignalBroadcaster), keeping the
//! history of status changes on the way.

pub mod effect;
mod machine;

pub use effect::{Effect, GameEvent, Notice};
pub use machine::GameMachine;
