//! Status transition history.
//!
//! Tracks every status change of a game with its timestamp and the round it
//! happened in. History values are immutable: recording returns a new value.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single status change.
///
/// # Example
///
/// ```rust
/// use recall::core::StateTransition;
/// use recall::game::GameStatus;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: GameStatus::Idle,
///     to: GameStatus::Presenting,
///     timestamp: Utc::now(),
///     round: 1,
/// };
/// assert_eq!(transition.round, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The status being left
    pub from: S,
    /// The status being entered
    pub to: S,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
    /// Round counter at the moment of the change
    pub round: u32,
}

/// Ordered history of status changes.
///
/// # Example
///
/// ```rust
/// use recall::core::{StateHistory, StateTransition};
/// use recall::game::GameStatus;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: GameStatus::Idle,
///         to: GameStatus::Presenting,
///         timestamp: Utc::now(),
///         round: 1,
///     })
///     .record(StateTransition {
///         from: GameStatus::Presenting,
///         to: GameStatus::AwaitingInput,
///         timestamp: Utc::now(),
///         round: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GameStatus::Idle, &GameStatus::Presenting, &GameStatus::AwaitingInput]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of statuses traversed.
    ///
    /// Returns the `from` status of the first transition followed by the
    /// `to` status of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and the last transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Highest round reached in this history.
    pub fn max_round(&self) -> u32 {
        self.transitions.iter().map(|t| t.round).max().unwrap_or(0)
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn change(from: GameStatus, to: GameStatus, round: u32) -> StateTransition<GameStatus> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            round,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<GameStatus> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.max_round(), 0);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(change(GameStatus::Idle, GameStatus::Presenting, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_follows_a_round() {
        let history = StateHistory::new()
            .record(change(GameStatus::Idle, GameStatus::Presenting, 1))
            .record(change(GameStatus::Presenting, GameStatus::AwaitingInput, 1))
            .record(change(GameStatus::AwaitingInput, GameStatus::GameOver, 1));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &GameStatus::Idle,
                &GameStatus::Presenting,
                &GameStatus::AwaitingInput,
                &GameStatus::GameOver,
            ]
        );
    }

    #[test]
    fn max_round_tracks_highest_round() {
        let history = StateHistory::new()
            .record(change(GameStatus::Idle, GameStatus::Presenting, 1))
            .record(change(GameStatus::AwaitingInput, GameStatus::Presenting, 3))
            .record(change(GameStatus::GameOver, GameStatus::Idle, 0));

        assert_eq!(history.max_round(), 3);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: GameStatus::Idle,
                to: GameStatus::Presenting,
                timestamp: start,
                round: 1,
            })
            .record(StateTransition {
                from: GameStatus::Presenting,
                to: GameStatus::AwaitingInput,
                timestamp: start + chrono::Duration::milliseconds(1300),
                round: 1,
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(1300)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(change(GameStatus::Idle, GameStatus::Presenting, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<GameStatus> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].to, GameStatus::Presenting);
    }
}
