//! Game machine that applies the effects of each transition.

use crate::broadcast::{BroadcastError, SignalBroadcaster};
use crate::core::{StateHistory, StateTransition};
use crate::effects::effect::{Effect, GameEvent};
use crate::game::{
    Alarm, AlarmToken, Command, GameRules, GameState, GameStatus, Signal, SignalSource,
};
use crate::policy::GameConfig;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

/// A running game: the pure rules plus everything they need from outside.
///
/// The machine never waits by itself. Every operation returns the alarm it
/// armed, if any, and the caller is expected to feed
/// [`fire`](GameMachine::fire) back once the alarm's delay has passed.
/// [`GameSession`](crate::session::GameSession) does that with real timers.
pub struct GameMachine<B: SignalBroadcaster> {
    rules: GameRules,
    state: GameState,
    signals: Box<dyn SignalSource + Send>,
    broadcaster: B,
    history: StateHistory<GameStatus>,
    pending: Option<Alarm>,
}

impl<B: SignalBroadcaster> GameMachine<B> {
    /// Create an idle machine. Use [`GameBuilder`](crate::builder::GameBuilder)
    /// to get a validated configuration.
    pub fn new(config: GameConfig, signals: Box<dyn SignalSource + Send>, broadcaster: B) -> Self {
        Self {
            rules: GameRules::new(config),
            state: GameState::new(),
            signals,
            broadcaster,
            history: StateHistory::new(),
            pending: None,
        }
    }

    /// Current snapshot (pure)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    /// Status changes of the current game (pure)
    pub fn history(&self) -> &StateHistory<GameStatus> {
        &self.history
    }

    /// The alarm the machine is waiting on, if it is still live.
    pub fn pending_alarm(&self) -> Option<Alarm> {
        self.pending
            .filter(|alarm| self.state.pending() == Some(alarm.token))
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    /// Begin a game. No-op unless idle.
    pub fn start(&mut self) -> Option<Alarm> {
        self.dispatch(Command::Start)
    }

    /// Submit a player move. No-op unless the machine waits for one.
    pub fn submit_input(&mut self, signal: Signal) -> Option<Alarm> {
        self.dispatch(Command::Input(signal))
    }

    /// Submit a player move by alphabet index; indexes outside it are ignored.
    pub fn submit_input_index(&mut self, index: usize) -> Option<Alarm> {
        match Signal::from_index(index) {
            Some(signal) => self.submit_input(signal),
            None => {
                debug!(index, "input outside the alphabet ignored");
                None
            }
        }
    }

    /// Abandon the current game and return to idle.
    pub fn reset(&mut self) -> Option<Alarm> {
        self.dispatch(Command::Reset)
    }

    /// Deliver a fired alarm. Stale tokens are ignored.
    pub fn fire(&mut self, token: AlarmToken) -> Option<Alarm> {
        self.dispatch(Command::Alarm(token))
    }

    /// Reduce one command and carry out its effects.
    ///
    /// Returns the alarm armed by this command. Rejected commands return
    /// `None` and leave any earlier alarm pending.
    #[instrument(skip(self), fields(status = %self.state.status()))]
    pub fn dispatch(&mut self, command: Command) -> Option<Alarm> {
        let transition = self
            .rules
            .reduce(&self.state, command, self.signals.as_mut());

        if !transition.accepted {
            debug!("command ignored");
            return None;
        }

        let scheduled = transition.scheduled();
        for effect in &transition.effects {
            self.apply(effect, transition.state.round());
        }
        self.state = transition.state;
        self.pending = scheduled;
        scheduled
    }

    fn apply(&mut self, effect: &Effect, round: u32) {
        let outcome = match effect {
            Effect::Emit(event) => {
                if let GameEvent::StatusChanged { from, to } = event {
                    self.record(*from, *to, round);
                }
                self.broadcaster.observe(event)
            }
            Effect::Present { signal, duration } => self.broadcaster.present(*signal, *duration),
            Effect::CancelPresentation => self.broadcaster.cancel_presentation(),
            Effect::Notify(notice) => self.broadcaster.notify(*notice),
            Effect::Schedule(alarm) => {
                debug!(
                    token = alarm.token.value(),
                    after_ms = alarm.after.as_millis() as u64,
                    "alarm armed"
                );
                Ok(())
            }
        };
        if let Err(error) = outcome {
            report(effect, &error);
        }
    }

    fn record(&mut self, from: GameStatus, to: GameStatus, round: u32) {
        if from == GameStatus::Idle {
            info!(round, "game started");
            self.history = StateHistory::new();
        }
        if to == GameStatus::GameOver {
            info!(round, score = self.state.score(), "game over");
        }
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            round,
        });
    }
}

fn report(effect: &Effect, error: &BroadcastError) {
    warn!(?effect, %error, "broadcaster failed, continuing");
}
