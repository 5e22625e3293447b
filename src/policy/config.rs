//! Game configuration: step durations and the scoring policy.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete configuration of one game machine.
///
/// Every field has a default, so a partial JSON document only needs to
/// name what it changes:
///
/// ```rust
/// use recall::policy::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "scoring": { "bonus_threshold": 40 } }"#).unwrap();
/// assert_eq!(config.scoring.bonus_threshold, 40);
/// assert_eq!(config.timings.flash_ms, 1000);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timings: Timings,
    pub scoring: ScorePolicy,
    /// Seed for the signal generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }
}

/// How long each timed step lasts, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub level_up_ms: u64,
    pub settle_ms: u64,
    pub bonus_ms: u64,
    pub flash_ms: u64,
    pub gap_ms: u64,
    pub input_highlight_ms: u64,
    pub round_pause_ms: u64,
    pub game_over_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            level_up_ms: 1000,
            settle_ms: 200,
            bonus_ms: 3000,
            flash_ms: 1000,
            gap_ms: 300,
            input_highlight_ms: 300,
            round_pause_ms: 1000,
            game_over_ms: 5000,
        }
    }
}

impl Timings {
    pub fn level_up(&self) -> Duration {
        Duration::from_millis(self.level_up_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn bonus(&self) -> Duration {
        Duration::from_millis(self.bonus_ms)
    }

    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    pub fn input_highlight(&self) -> Duration {
        Duration::from_millis(self.input_highlight_ms)
    }

    pub fn round_pause(&self) -> Duration {
        Duration::from_millis(self.round_pause_ms)
    }

    pub fn game_over(&self) -> Duration {
        Duration::from_millis(self.game_over_ms)
    }
}

/// Which score the bonus check looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusProjection {
    /// Current score plus one round increment.
    #[default]
    Projected,
    /// Current score as committed.
    Committed,
}

/// Points per round and when the bonus is paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorePolicy {
    pub round_increment: u32,
    pub bonus_increment: u32,
    pub bonus_threshold: u32,
    pub projection: BonusProjection,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            round_increment: 10,
            bonus_increment: 100,
            bonus_threshold: 30,
            projection: BonusProjection::Projected,
        }
    }
}

impl ScorePolicy {
    /// Whether a round starting with `score` and numbered `round` pays the bonus.
    ///
    /// The first round never does. A zero threshold never pays.
    pub fn bonus_due(&self, score: u32, round: u32) -> bool {
        if round <= 1 || self.bonus_threshold == 0 {
            return false;
        }
        let probe = match self.projection {
            BonusProjection::Projected => score.saturating_add(self.round_increment),
            BonusProjection::Committed => score,
        };
        probe % self.bonus_threshold == 0
    }
}
