#![allow(dead_code)]

// Shared harness for the integration tests.

use recall::{
    BroadcastError, GameBuilder, GameConfig, GameEvent, GameMachine, Notice, Signal,
    SignalBroadcaster,
};
use std::sync::Once;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a quiet test subscriber. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Everything a broadcaster was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Present(Signal, Duration),
    Cancel,
    Notify(Notice),
    Event(GameEvent),
}

#[derive(Debug, Default)]
pub struct Recording {
    pub calls: Vec<Call>,
}

impl Recording {
    pub fn presented(&self) -> Vec<Signal> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Present(signal, _) => Some(*signal),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Notify(notice) => Some(*notice),
                _ => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<GameEvent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Event(event) => Some(*event),
                _ => None,
            })
            .collect()
    }

    pub fn cancels(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Cancel).count()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl SignalBroadcaster for Recording {
    fn present(&mut self, signal: Signal, duration: Duration) -> Result<(), BroadcastError> {
        self.calls.push(Call::Present(signal, duration));
        Ok(())
    }

    fn cancel_presentation(&mut self) -> Result<(), BroadcastError> {
        self.calls.push(Call::Cancel);
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> Result<(), BroadcastError> {
        self.calls.push(Call::Notify(notice));
        Ok(())
    }

    fn observe(&mut self, event: &GameEvent) -> Result<(), BroadcastError> {
        self.calls.push(Call::Event(*event));
        Ok(())
    }
}

/// Source that plays `signals` in order, then repeats the last one.
pub fn scripted(signals: &[Signal]) -> impl FnMut() -> Signal + Send + 'static {
    let script = signals.to_vec();
    let mut next = 0;
    move || {
        let signal = script
            .get(next)
            .or_else(|| script.last())
            .copied()
            .unwrap_or(Signal::Green);
        next += 1;
        signal
    }
}

pub fn machine(signals: &[Signal]) -> GameMachine<Recording> {
    machine_with(GameConfig::default(), signals)
}

pub fn machine_with(config: GameConfig, signals: &[Signal]) -> GameMachine<Recording> {
    init_logging();
    GameBuilder::new()
        .config(config)
        .signals(scripted(signals))
        .broadcaster(Recording::default())
        .build()
        .unwrap()
}

/// Fire alarms until the machine stops scheduling them. Returns the total
/// simulated time.
pub fn settle<B: SignalBroadcaster>(machine: &mut GameMachine<B>) -> Duration {
    let mut elapsed = Duration::ZERO;
    while let Some(alarm) = machine.pending_alarm() {
        elapsed += alarm.after;
        machine.fire(alarm.token);
    }
    elapsed
}

/// Enter the whole sequence correctly, settling after each input.
pub fn play_round<B: SignalBroadcaster>(machine: &mut GameMachine<B>) {
    let sequence = machine.state().sequence().to_vec();
    for signal in sequence {
        machine.submit_input(signal);
        settle(machine);
    }
}
