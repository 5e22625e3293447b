//! The notification surface the game drives.
//!
//! A broadcaster turns requests from the game into light, sound or whatever
//! a front end uses. Calls are fire-and-forget: the game owns all timing and
//! keeps going when a broadcaster reports a failure.

use crate::effects::{GameEvent, Notice};
use crate::game::Signal;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Failure reported by a broadcaster. Logged by the shell, never propagated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BroadcastError {
    #[error("output device unavailable: {0}")]
    Unavailable(String),

    #[error("broadcast failed: {0}")]
    Failed(String),
}

/// Receiver of the game's presentation requests.
///
/// Report failures through [`BroadcastError`]; the machine logs them and
/// carries on. Implementations must not panic: a panic unwinds through the
/// machine, and inside a [`GameSession`](crate::session::GameSession) it ends
/// the session task, after which every handle call returns
/// [`SessionError::Closed`](crate::session::SessionError::Closed).
pub trait SignalBroadcaster {
    /// Emphasize `signal` for roughly `duration`.
    fn present(&mut self, signal: Signal, duration: Duration) -> Result<(), BroadcastError>;

    /// Stop any multi-step presentation in progress. Idempotent.
    fn cancel_presentation(&mut self) -> Result<(), BroadcastError>;

    /// Deliver a one-shot decorative notice.
    fn notify(&mut self, notice: Notice) -> Result<(), BroadcastError>;

    /// Observe a state change. Ignored unless overridden.
    fn observe(&mut self, _event: &GameEvent) -> Result<(), BroadcastError> {
        Ok(())
    }
}

impl<B: SignalBroadcaster + ?Sized> SignalBroadcaster for Box<B> {
    fn present(&mut self, signal: Signal, duration: Duration) -> Result<(), BroadcastError> {
        (**self).present(signal, duration)
    }

    fn cancel_presentation(&mut self) -> Result<(), BroadcastError> {
        (**self).cancel_presentation()
    }

    fn notify(&mut self, notice: Notice) -> Result<(), BroadcastError> {
        (**self).notify(notice)
    }

    fn observe(&mut self, event: &GameEvent) -> Result<(), BroadcastError> {
        (**self).observe(event)
    }
}

/// Broadcaster that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBroadcaster;

impl SignalBroadcaster for NullBroadcaster {
    fn present(&mut self, _signal: Signal, _duration: Duration) -> Result<(), BroadcastError> {
        Ok(())
    }

    fn cancel_presentation(&mut self) -> Result<(), BroadcastError> {
        Ok(())
    }

    fn notify(&mut self, _notice: Notice) -> Result<(), BroadcastError> {
        Ok(())
    }
}

/// Broadcaster that writes every request to the `tracing` log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBroadcaster;

impl SignalBroadcaster for TracingBroadcaster {
    fn present(&mut self, signal: Signal, duration: Duration) -> Result<(), BroadcastError> {
        info!(%signal, duration_ms = duration.as_millis() as u64, "present");
        Ok(())
    }

    fn cancel_presentation(&mut self) -> Result<(), BroadcastError> {
        info!("cancel presentation");
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> Result<(), BroadcastError> {
        info!(?notice, "notice");
        Ok(())
    }

    fn observe(&mut self, event: &GameEvent) -> Result<(), BroadcastError> {
        debug!(?event, "game event");
        Ok(())
    }
}
