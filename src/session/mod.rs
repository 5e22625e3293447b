//! Runtime boundary: a tokio task that owns a machine and its timer.
//!
//! [`GameMachine`] never waits on its own. A [`GameSession`] moves the machine
//! into a task, turns every pending [`Alarm`](crate::game::Alarm) into a real
//! `tokio::time::Sleep`, and publishes the snapshot after each command on a
//! `watch` channel. Callers talk to the task through an unbounded command
//! channel, so every request is handled strictly in arrival order.

use crate::broadcast::SignalBroadcaster;
use crate::effects::GameMachine;
use crate::game::{Alarm, AlarmToken, Command, GameState, Signal};
use std::future::pending;
use std::pin::Pin;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep, Sleep};
use tracing::{debug, warn};

/// Errors returned by [`GameSession`] handles.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("game session is no longer running")]
    Closed,
}

type Timer = (AlarmToken, Pin<Box<Sleep>>);

/// Handle to a game running on the tokio runtime.
///
/// ```rust
/// use recall::builder::GameBuilder;
/// use recall::game::{GameStatus, Signal};
/// use recall::session::GameSession;
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// let machine = GameBuilder::new().signals(|| Signal::Blue).build().unwrap();
/// let session = GameSession::spawn(machine);
/// let mut updates = session.subscribe();
///
/// session.start().unwrap();
/// updates
///     .wait_for(|state| state.status() == GameStatus::AwaitingInput)
///     .await
///     .unwrap();
///
/// session.submit_input(Signal::Blue).unwrap();
/// let state = updates.wait_for(|state| state.round() == 2).await.unwrap().clone();
/// assert_eq!(state.score(), 10);
///
/// session.shutdown().await;
/// # }
/// ```
pub struct GameSession {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<GameState>,
    task: JoinHandle<()>,
}

impl GameSession {
    /// Move `machine` into a new task. Must be called inside a tokio runtime.
    pub fn spawn<B>(machine: GameMachine<B>) -> Self
    where
        B: SignalBroadcaster + Send + 'static,
    {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(machine.state().clone());
        let task = tokio::spawn(run(machine, receiver, publisher));

        Self {
            commands,
            snapshots,
            task,
        }
    }

    pub fn start(&self) -> Result<(), SessionError> {
        self.send(Command::Start)
    }

    pub fn submit_input(&self, signal: Signal) -> Result<(), SessionError> {
        self.send(Command::Input(signal))
    }

    pub fn reset(&self) -> Result<(), SessionError> {
        self.send(Command::Reset)
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> GameState {
        self.snapshots.borrow().clone()
    }

    /// Receiver that sees every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.snapshots.clone()
    }

    /// Close the command channel and wait for the task to finish.
    ///
    /// Pending timers are dropped with the task; no further alarm fires.
    pub async fn shutdown(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(error) = task.await {
            warn!(%error, "game session task ended abnormally");
        }
    }

    fn send(&self, command: Command) -> Result<(), SessionError> {
        self.commands
            .send(command)
            .map_err(|_| SessionError::Closed)
    }
}

async fn run<B: SignalBroadcaster>(
    mut machine: GameMachine<B>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<GameState>,
) {
    debug!("game session started");
    let mut timer: Option<Timer> = None;

    loop {
        let command = tokio::select! {
            received = commands.recv() => match received {
                Some(command) => command,
                None => break,
            },
            token = alarm_elapsed(&mut timer) => Command::Alarm(token),
        };

        machine.dispatch(command);
        timer = rearm(timer, machine.pending_alarm());
        snapshots.send_replace(machine.state().clone());
    }

    debug!("game session stopped");
}

/// Resolve with the token of the armed timer once it elapses; never without one.
async fn alarm_elapsed(timer: &mut Option<Timer>) -> AlarmToken {
    match timer {
        Some((token, sleeping)) => {
            sleeping.as_mut().await;
            *token
        }
        None => pending().await,
    }
}

fn rearm(current: Option<Timer>, alarm: Option<Alarm>) -> Option<Timer> {
    match (current, alarm) {
        (Some((token, sleeping)), Some(alarm)) if token == alarm.token => Some((token, sleeping)),
        (_, Some(alarm)) => Some((alarm.token, Box::pin(sleep(alarm.after)))),
        (_, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broadcast::BroadcastError;
    use crate::builder::GameBuilder;
    use crate::effects::Notice;
    use crate::game::GameStatus;
    use std::time::Duration;
    use tokio::time::Instant;

    /// Broadcaster that gives up the moment it is asked to show anything.
    struct Exploding;

    impl SignalBroadcaster for Exploding {
        fn present(&mut self, _signal: Signal, _duration: Duration) -> Result<(), BroadcastError> {
            panic!("display caught fire");
        }

        fn cancel_presentation(&mut self) -> Result<(), BroadcastError> {
            Ok(())
        }

        fn notify(&mut self, _notice: Notice) -> Result<(), BroadcastError> {
            Ok(())
        }
    }

    fn session_with(signal: Signal) -> GameSession {
        let machine = GameBuilder::new().signals(move || signal).build().unwrap();
        GameSession::spawn(machine)
    }

    #[tokio::test(start_paused = true)]
    async fn first_round_is_presented_on_real_timers() {
        let session = session_with(Signal::Red);
        let mut updates = session.subscribe();
        let began = Instant::now();

        session.start().unwrap();
        let state = updates
            .wait_for(|s| s.status() == GameStatus::AwaitingInput)
            .await
            .unwrap()
            .clone();

        assert_eq!(state.sequence(), &[Signal::Red]);
        assert!(!state.is_busy());
        assert!(began.elapsed() >= Duration::from_millis(1300));

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn reset_stops_presentation_and_timers() {
        let session = session_with(Signal::Green);
        let mut updates = session.subscribe();

        session.start().unwrap();
        updates
            .wait_for(|s| s.status() == GameStatus::Presenting)
            .await
            .unwrap();
        session.reset().unwrap();
        updates
            .wait_for(|s| s.status() == GameStatus::Idle)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = session.snapshot();
        assert_eq!(state.status(), GameStatus::Idle);
        assert!(state.sequence().is_empty());
        assert_eq!(state.pending(), None);

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_input_resets_after_game_over_hold() {
        let session = session_with(Signal::Orange);
        let mut updates = session.subscribe();

        session.start().unwrap();
        updates
            .wait_for(|s| s.status() == GameStatus::AwaitingInput)
            .await
            .unwrap();
        session.submit_input(Signal::Green).unwrap();
        updates
            .wait_for(|s| s.status() == GameStatus::GameOver)
            .await
            .unwrap();
        let over = Instant::now();

        let state = updates
            .wait_for(|s| s.status() == GameStatus::Idle)
            .await
            .unwrap()
            .clone();

        assert!(over.elapsed() >= Duration::from_millis(5000));
        assert_eq!(state.score(), 0);
        assert_eq!(state.round(), 0);

        session.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn commands_fail_once_the_task_is_gone() {
        let machine = GameBuilder::new()
            .signals(|| Signal::Blue)
            .broadcaster(Exploding)
            .build()
            .unwrap();
        let session = GameSession::spawn(machine);
        let mut updates = session.subscribe();

        session.start().unwrap();
        while updates.changed().await.is_ok() {}

        assert_eq!(session.reset(), Err(SessionError::Closed));
        session.shutdown().await;
    }
}
