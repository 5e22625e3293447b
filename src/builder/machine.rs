//! Builder for constructing game machines.

use crate::broadcast::{NullBroadcaster, SignalBroadcaster};
use crate::builder::error::BuildError;
use crate::effects::GameMachine;
use crate::game::{RandomSignals, SignalSource};
use crate::policy::GameConfig;

/// Builder for [`GameMachine`] with a fluent API.
///
/// ```rust
/// use recall::builder::GameBuilder;
/// use recall::game::GameStatus;
///
/// let machine = GameBuilder::new().seed(7).bonus_threshold(40).build().unwrap();
/// assert_eq!(machine.status(), GameStatus::Idle);
/// assert_eq!(machine.config().scoring.bonus_threshold, 40);
/// ```
pub struct GameBuilder<B: SignalBroadcaster> {
    config: GameConfig,
    signals: Option<Box<dyn SignalSource + Send>>,
    broadcaster: B,
}

impl GameBuilder<NullBroadcaster> {
    /// Create a builder with the default configuration and no broadcaster.
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            signals: None,
            broadcaster: NullBroadcaster,
        }
    }
}

impl Default for GameBuilder<NullBroadcaster> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: SignalBroadcaster> GameBuilder<B> {
    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the default random signal source.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn bonus_threshold(mut self, threshold: u32) -> Self {
        self.config.scoring.bonus_threshold = threshold;
        self
    }

    /// Use `signals` instead of the random source. The seed is then unused.
    pub fn signals(mut self, signals: impl SignalSource + Send + 'static) -> Self {
        self.signals = Some(Box::new(signals));
        self
    }

    /// Route presentation requests to `broadcaster`.
    pub fn broadcaster<B2: SignalBroadcaster>(self, broadcaster: B2) -> GameBuilder<B2> {
        GameBuilder {
            config: self.config,
            signals: self.signals,
            broadcaster,
        }
    }

    /// Validate the configuration and build an idle machine.
    pub fn build(self) -> Result<GameMachine<B>, BuildError> {
        self.config.check()?;

        let signals = match self.signals {
            Some(signals) => signals,
            None => Box::new(RandomSignals::new(self.config.seed)),
        };

        Ok(GameMachine::new(self.config, signals, self.broadcaster))
    }
}
