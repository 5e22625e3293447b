//! Core State trait for game statuses.
//!
//! A status describes which interaction is currently legal. The trait only
//! exposes pure inspection methods so statuses can be logged, recorded in
//! history and compared without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine statuses.
///
/// All methods are pure. Statuses are plain values describing where the
/// machine currently is; the data that changes between rounds lives in the
/// game snapshot, not in the status.
///
/// # Required Traits
///
/// - `Clone` + `PartialEq`: statuses are recorded and compared in history
/// - `Debug`: statuses show up in logs
/// - `Serialize` + `Deserialize`: statuses travel with serialized snapshots
///
/// # Example
///
/// ```rust
/// use recall::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Turn {
///     Machine,
///     Player,
///     Over,
/// }
///
/// impl State for Turn {
///     fn name(&self) -> &str {
///         match self {
///             Self::Machine => "Machine",
///             Self::Player => "Player",
///             Self::Over => "Over",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Over)
///     }
///
///     fn is_interactive(&self) -> bool {
///         matches!(self, Self::Player)
///     }
/// }
///
/// assert!(Turn::Player.is_interactive());
/// assert!(!Turn::Machine.is_interactive());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the status name for display/logging.
    fn name(&self) -> &str;

    /// Check if this status ends a game.
    ///
    /// A final status is held only until the machine clears itself back to
    /// its starting point.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if the player may act in this status.
    ///
    /// Default implementation returns `false`.
    fn is_interactive(&self) -> bool {
        false
    }
}
