//! Coarse game status and the timed phase inside it.

use crate::state_enum;
use serde::{Deserialize, Serialize};

state_enum! {
    /// What kind of interaction is currently legal.
    #[derive(Copy, Eq, Hash, Default)]
    pub enum GameStatus {
        /// No game running; a start request begins one.
        #[default]
        Idle,
        /// The machine is announcing the round or replaying the sequence.
        Presenting,
        /// The player is reproducing the sequence.
        AwaitingInput,
        /// A wrong input ended the game; held until the automatic reset.
        GameOver,
    }
    final: [GameOver]
    interactive: [AwaitingInput]
}

/// What a resolved input leads to once its highlight ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputOutcome {
    /// Correct, more inputs expected this round.
    Continue,
    /// Correct and the round is complete.
    RoundWon,
}

/// The timed step the machine is in.
///
/// Every phase except `Idle` and `AwaitingInput` has exactly one pending
/// alarm, and that alarm's firing is what moves the machine out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    LevelUp,
    LevelUpSettle,
    Bonus,
    BonusSettle,
    Flash {
        index: usize,
    },
    Gap {
        index: usize,
    },
    AwaitingInput,
    InputHighlight {
        outcome: InputOutcome,
    },
    RoundPause,
    GameOver,
}

impl Phase {
    /// Phases that belong to the presentation of a round.
    pub fn is_presenting(&self) -> bool {
        matches!(
            self,
            Phase::LevelUp
                | Phase::LevelUpSettle
                | Phase::Bonus
                | Phase::BonusSettle
                | Phase::Flash { .. }
                | Phase::Gap { .. }
        )
    }

    /// Status a machine in this phase reports.
    pub fn status(&self) -> GameStatus {
        match self {
            Phase::Idle => GameStatus::Idle,
            Phase::AwaitingInput | Phase::InputHighlight { .. } | Phase::RoundPause => {
                GameStatus::AwaitingInput
            }
            Phase::GameOver => GameStatus::GameOver,
            _ => GameStatus::Presenting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;

    #[test]
    fn game_over_is_the_only_final_status() {
        let finals: Vec<_> = GameStatus::ALL.iter().filter(|s| s.is_final()).collect();
        assert_eq!(finals, vec![&GameStatus::GameOver]);
    }

    #[test]
    fn only_awaiting_input_is_interactive() {
        let interactive: Vec<_> = GameStatus::ALL
            .iter()
            .filter(|s| s.is_interactive())
            .collect();
        assert_eq!(interactive, vec![&GameStatus::AwaitingInput]);
    }

    #[test]
    fn default_status_is_idle() {
        assert_eq!(GameStatus::default(), GameStatus::Idle);
        assert_eq!(Phase::default().status(), GameStatus::Idle);
    }

    #[test]
    fn presentation_phases_report_presenting() {
        for phase in [
            Phase::LevelUp,
            Phase::LevelUpSettle,
            Phase::Bonus,
            Phase::BonusSettle,
            Phase::Flash { index: 0 },
            Phase::Gap { index: 2 },
        ] {
            assert!(phase.is_presenting());
            assert_eq!(phase.status(), GameStatus::Presenting);
        }
    }

    #[test]
    fn input_resolution_stays_in_awaiting_input() {
        assert_eq!(
            Phase::InputHighlight {
                outcome: InputOutcome::RoundWon
            }
            .status(),
            GameStatus::AwaitingInput
        );
        assert_eq!(Phase::RoundPause.status(), GameStatus::AwaitingInput);
        assert!(!Phase::RoundPause.is_presenting());
    }
}
