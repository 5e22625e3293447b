//! Immutable snapshot of a game.

use super::signal::Signal;
use super::status::{GameStatus, Phase};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Identifies one scheduled timer.
///
/// Tokens increase monotonically for the lifetime of a machine and are never
/// reused, so an alarm that fires after its timer was superseded can always
/// be told apart from the live one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AlarmToken(u64);

impl AlarmToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Request to deliver `Command::Alarm(token)` once `after` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alarm {
    pub token: AlarmToken,
    pub after: Duration,
}

/// Everything the game knows at one instant.
///
/// Snapshots are never mutated in place by the rules; every transition
/// produces a fresh one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) phase: Phase,
    pub(crate) sequence: Vec<Signal>,
    pub(crate) input: Vec<Signal>,
    pub(crate) round: u32,
    pub(crate) score: u32,
    pub(crate) flashing: Option<Signal>,
    pub(crate) highlighted: Option<Signal>,
    pub(crate) pending: Option<AlarmToken>,
    pub(crate) next_token: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GameStatus {
        self.phase.status()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Signals the player must reproduce, oldest first.
    pub fn sequence(&self) -> &[Signal] {
        &self.sequence
    }

    /// Signals the player entered this round.
    pub fn input(&self) -> &[Signal] {
        &self.input
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Signal currently lit by the replay, if any.
    pub fn flashing(&self) -> Option<Signal> {
        self.flashing
    }

    /// Player input currently highlighted, if any.
    pub fn highlighted(&self) -> Option<Signal> {
        self.highlighted
    }

    /// Token of the timer the machine is waiting on.
    pub fn pending(&self) -> Option<AlarmToken> {
        self.pending
    }

    /// True while a timed step is running; start and input are ignored then.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Hands out the next token and marks it as the one pending.
    pub(crate) fn arm(&mut self) -> AlarmToken {
        self.next_token += 1;
        let token = AlarmToken(self.next_token);
        self.pending = Some(token);
        token
    }

    /// Back to the empty game, keeping the token counter.
    pub(crate) fn cleared(&self) -> Self {
        Self {
            next_token: self.next_token,
            ..Self::default()
        }
    }
}
