//! Recall: a Simon-style memory game built as a pure state machine.
//!
//! The game is split along the "pure core, imperative shell" line:
//!
//! - [`game`] holds the rules. `GameRules::reduce` maps a snapshot and a
//!   command to the next snapshot plus a list of effects, and never touches a
//!   clock or a device.
//! - [`effects`] holds [`GameMachine`], which carries those effects out
//!   against a [`SignalBroadcaster`] and records status history.
//! - [`session`] runs a machine on tokio, turning scheduled alarms into real
//!   timers.
//!
//! Time only enters the game through alarms. Every timed step arms exactly one
//! alarm identified by an [`AlarmToken`]; an alarm whose token is no longer the
//! pending one is ignored, which is how a reset cancels a presentation in
//! flight.
//!
//! # Example
//!
//! Driving a machine by hand, firing each alarm as soon as it is armed:
//!
//! ```rust
//! use recall::{GameBuilder, GameStatus, Signal};
//!
//! let mut machine = GameBuilder::new().signals(|| Signal::Green).build().unwrap();
//!
//! machine.start();
//! while let Some(alarm) = machine.pending_alarm() {
//!     machine.fire(alarm.token);
//! }
//! assert_eq!(machine.status(), GameStatus::AwaitingInput);
//!
//! machine.submit_input(Signal::Green);
//! while let Some(alarm) = machine.pending_alarm() {
//!     machine.fire(alarm.token);
//! }
//! assert_eq!(machine.state().round(), 2);
//! assert_eq!(machine.state().score(), 10);
//! ```

pub mod core;
#[macro_use]
pub mod builder;
pub mod broadcast;
pub mod effects;
pub mod game;
pub mod policy;
pub mod session;

pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use broadcast::{BroadcastError, NullBroadcaster, SignalBroadcaster, TracingBroadcaster};
pub use builder::{BuildError, GameBuilder};
pub use effects::{Effect, GameEvent, GameMachine, Notice};
pub use game::{
    Alarm, AlarmToken, Command, GameRules, GameState, GameStatus, Phase, Signal, SignalSource,
};
pub use policy::{ConfigViolation, GameConfig, ScorePolicy, Timings};
pub use session::{GameSession, SessionError};
