//! Values describing what a transition wants done.

use crate::game::{Alarm, GameStatus, Signal};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One-shot decorative notice. Dropping one never affects the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    LevelUp,
    Bonus,
    Failure,
}

/// Observable change emitted for presentation layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    SignalFlash { signal: Signal },
    SignalClear,
    InputHighlight { signal: Signal },
    InputClear,
    LevelUpBegin { round: u32 },
    LevelUpEnd,
    BonusBegin { award: u32 },
    BonusEnd,
    GameOverBegin,
    GameOverEnd,
    ScoreChanged { score: u32 },
    RoundChanged { round: u32 },
    StatusChanged { from: GameStatus, to: GameStatus },
}

/// Side effect requested by the rules, executed in order by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Emit(GameEvent),
    Present { signal: Signal, duration: Duration },
    CancelPresentation,
    Notify(Notice),
    Schedule(Alarm),
}
