//! The game as a pure transition function.
//!
//! `GameRules::reduce` takes a snapshot and a command and returns the next
//! snapshot together with the effects the shell has to carry out. Time only
//! enters through `Command::Alarm`: each timed step schedules exactly one
//! alarm, and firing that alarm is the only way to leave the step.

use super::signal::{Signal, SignalSource};
use super::snapshot::{Alarm, AlarmToken, GameState};
use super::status::{GameStatus, InputOutcome, Phase};
use crate::core::{Guard, State};
use crate::effects::{Effect, GameEvent, Notice};
use crate::policy::GameConfig;
use std::time::Duration;

/// Everything that can happen to a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Begin a game. Ignored unless idle.
    Start,
    /// A player move. Ignored unless the machine waits for one.
    Input(Signal),
    /// Abandon the current game from any state.
    Reset,
    /// A scheduled timer fired.
    Alarm(AlarmToken),
}

/// Result of reducing one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub effects: Vec<Effect>,
    /// False when the command was rejected and nothing changed.
    pub accepted: bool,
}

impl Transition {
    fn ignored(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            accepted: false,
        }
    }

    /// The alarm this transition scheduled, if any.
    pub fn scheduled(&self) -> Option<Alarm> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Schedule(alarm) => Some(*alarm),
            _ => None,
        })
    }
}

/// Working copy of a snapshot plus the effects collected so far.
struct Step {
    state: GameState,
    effects: Vec<Effect>,
}

impl Step {
    fn new(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.effects.push(Effect::Emit(event));
    }

    fn notify(&mut self, notice: Notice) {
        self.effects.push(Effect::Notify(notice));
    }

    fn present(&mut self, signal: Signal, duration: Duration) {
        self.effects.push(Effect::Present { signal, duration });
    }

    fn schedule(&mut self, after: Duration) {
        let token = self.state.arm();
        self.effects.push(Effect::Schedule(Alarm { token, after }));
    }

    fn enter(&mut self, phase: Phase) {
        let from = self.state.status();
        self.state.phase = phase;
        let to = self.state.status();
        if from != to {
            self.emit(GameEvent::StatusChanged { from, to });
        }
    }

    fn finish(self) -> Transition {
        Transition {
            state: self.state,
            effects: self.effects,
            accepted: true,
        }
    }
}

/// The rules of one game, parameterized by its configuration.
pub struct GameRules {
    config: GameConfig,
    start_gate: Guard<GameState>,
    input_gate: Guard<GameState>,
}

impl std::fmt::Debug for GameRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRules")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GameRules {
    pub fn new(config: GameConfig) -> Self {
        let idle = Guard::new(|s: &GameState| s.status() == GameStatus::Idle);
        let interactive = Guard::new(|s: &GameState| s.status().is_interactive());
        let room_left = Guard::new(|s: &GameState| s.input.len() < s.sequence.len());

        Self {
            config,
            start_gate: idle.and(not_busy()),
            input_gate: interactive.and(not_busy()).and(room_left),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Compute the transition `command` causes from `state`.
    ///
    /// `signals` is only consulted when a round begins.
    pub fn reduce(
        &self,
        state: &GameState,
        command: Command,
        signals: &mut dyn SignalSource,
    ) -> Transition {
        match command {
            Command::Start if self.start_gate.check(state) => {
                let mut step = Step::new(state);
                self.begin_round(&mut step, signals);
                step.finish()
            }
            Command::Input(signal) if self.input_gate.check(state) => {
                let mut step = Step::new(state);
                self.accept_input(&mut step, signal);
                step.finish()
            }
            Command::Reset => {
                let mut step = Step::new(state);
                if state.phase.is_presenting() {
                    step.effects.push(Effect::CancelPresentation);
                }
                self.clear(&mut step);
                step.finish()
            }
            Command::Alarm(token) if state.pending == Some(token) => {
                let mut step = Step::new(state);
                step.state.pending = None;
                self.on_alarm(&mut step, signals);
                step.finish()
            }
            _ => Transition::ignored(state),
        }
    }

    /// Append a signal and announce the round.
    fn begin_round(&self, step: &mut Step, signals: &mut dyn SignalSource) {
        let previous = step.state.round;
        step.state.sequence.push(signals.next_signal());
        step.state.input.clear();
        step.state.round = step.state.sequence.len() as u32;
        let round = step.state.round;
        step.emit(GameEvent::RoundChanged { round });

        if previous > 0 {
            step.enter(Phase::LevelUp);
            step.notify(Notice::LevelUp);
            step.emit(GameEvent::LevelUpBegin { round });
            step.schedule(self.config.timings.level_up());
        } else {
            self.offer_bonus(step);
        }
    }

    fn offer_bonus(&self, step: &mut Step) {
        let scoring = &self.config.scoring;
        if !scoring.bonus_due(step.state.score, step.state.round) {
            self.flash(step, 0);
            return;
        }

        step.enter(Phase::Bonus);
        step.notify(Notice::Bonus);
        step.state.score = step.state.score.saturating_add(scoring.bonus_increment);
        step.emit(GameEvent::ScoreChanged {
            score: step.state.score,
        });
        step.emit(GameEvent::BonusBegin {
            award: scoring.bonus_increment,
        });
        step.schedule(self.config.timings.bonus());
    }

    /// Light the signal at `index`, or hand over to the player past the end.
    fn flash(&self, step: &mut Step, index: usize) {
        let Some(&signal) = step.state.sequence.get(index) else {
            step.enter(Phase::AwaitingInput);
            return;
        };

        let duration = self.config.timings.flash();
        step.enter(Phase::Flash { index });
        step.state.flashing = Some(signal);
        step.emit(GameEvent::SignalFlash { signal });
        step.present(signal, duration);
        step.schedule(duration);
    }

    fn accept_input(&self, step: &mut Step, signal: Signal) {
        let timings = &self.config.timings;
        step.state.input.push(signal);
        let position = step.state.input.len() - 1;
        step.state.highlighted = Some(signal);
        step.emit(GameEvent::InputHighlight { signal });
        step.present(signal, timings.input_highlight());

        if step.state.sequence.get(position) != Some(&signal) {
            step.enter(Phase::GameOver);
            step.notify(Notice::Failure);
            step.emit(GameEvent::GameOverBegin);
            step.schedule(timings.game_over());
            return;
        }

        let outcome = if step.state.input.len() == step.state.sequence.len() {
            step.state.score = step
                .state
                .score
                .saturating_add(self.config.scoring.round_increment);
            step.emit(GameEvent::ScoreChanged {
                score: step.state.score,
            });
            InputOutcome::RoundWon
        } else {
            InputOutcome::Continue
        };
        step.enter(Phase::InputHighlight { outcome });
        step.schedule(timings.input_highlight());
    }

    fn on_alarm(&self, step: &mut Step, signals: &mut dyn SignalSource) {
        let timings = &self.config.timings;
        match step.state.phase {
            Phase::LevelUp => {
                step.emit(GameEvent::LevelUpEnd);
                step.enter(Phase::LevelUpSettle);
                step.schedule(timings.settle());
            }
            Phase::LevelUpSettle => self.offer_bonus(step),
            Phase::Bonus => {
                step.emit(GameEvent::BonusEnd);
                step.enter(Phase::BonusSettle);
                step.schedule(timings.settle());
            }
            Phase::BonusSettle => self.flash(step, 0),
            Phase::Flash { index } => {
                step.state.flashing = None;
                step.emit(GameEvent::SignalClear);
                step.enter(Phase::Gap { index });
                step.schedule(timings.gap());
            }
            Phase::Gap { index } => self.flash(step, index + 1),
            Phase::InputHighlight { outcome } => {
                step.state.highlighted = None;
                step.emit(GameEvent::InputClear);
                match outcome {
                    InputOutcome::Continue => step.enter(Phase::AwaitingInput),
                    InputOutcome::RoundWon => {
                        step.enter(Phase::RoundPause);
                        step.schedule(timings.round_pause());
                    }
                }
            }
            Phase::RoundPause => self.begin_round(step, signals),
            Phase::GameOver => {
                step.emit(GameEvent::GameOverEnd);
                self.clear(step);
            }
            // No timer is ever armed in these phases.
            Phase::Idle | Phase::AwaitingInput => {}
        }
    }

    /// Drop all game data and return to idle.
    fn clear(&self, step: &mut Step) {
        let old = step.state.clone();
        if old.flashing.is_some() {
            step.emit(GameEvent::SignalClear);
        }
        if old.highlighted.is_some() {
            step.emit(GameEvent::InputClear);
        }
        // The settle phases come after the end event was already sent.
        match old.phase {
            Phase::LevelUp => step.emit(GameEvent::LevelUpEnd),
            Phase::Bonus => step.emit(GameEvent::BonusEnd),
            _ => {}
        }

        step.state = old.cleared();

        if old.score != 0 {
            step.emit(GameEvent::ScoreChanged { score: 0 });
        }
        if old.round != 0 {
            step.emit(GameEvent::RoundChanged { round: 0 });
        }
        if old.status() != GameStatus::Idle {
            step.emit(GameEvent::StatusChanged {
                from: old.status(),
                to: GameStatus::Idle,
            });
        }
    }
}

fn not_busy() -> Guard<GameState> {
    Guard::new(|s: &GameState| !s.is_busy())
}
