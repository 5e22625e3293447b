//! The Simon game itself: signals, statuses, snapshots and rules.
//!
//! Everything here is pure. `GameRules::reduce` is the whole game; the
//! shell in [`crate::effects`] and the runtime in [`crate::session`] only
//! carry out what it asks for.

mod rules;
mod signal;
mod snapshot;
mod status;

pub use rules::{Command, GameRules, Transition};
pub use signal::{RandomSignals, Signal, SignalSource, UnknownSignal};
pub use snapshot::{Alarm, AlarmToken, GameState};
pub use status::{GameStatus, InputOutcome, Phase};
