//! Guard predicates for gating commands.
//!
//! Guards are pure boolean functions over a snapshot. The game rules use
//! them to decide whether a start request or a player input may act on the
//! current state; a guard that rejects turns the command into a no-op.

/// Pure predicate that determines if a command may act on a value.
///
/// # Example
///
/// ```rust
/// use recall::core::Guard;
///
/// struct Board {
///     busy: bool,
///     moves: usize,
/// }
///
/// let idle = Guard::new(|b: &Board| !b.busy);
/// let has_room = Guard::new(|b: &Board| b.moves < 3);
/// let can_move = idle.and(has_room);
///
/// assert!(can_move.check(&Board { busy: false, moves: 1 }));
/// assert!(!can_move.check(&Board { busy: true, moves: 1 }));
/// assert!(!can_move.check(&Board { busy: false, moves: 3 }));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows acting on this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T: 'static> Guard<T> {
    /// Combine two guards; the result passes only when both pass.
    ///
    /// `other` is not evaluated when `self` already rejects.
    pub fn and(self, other: Guard<T>) -> Guard<T> {
        Guard::new(move |value: &T| self.check(value) && other.check(value))
    }
}

impl<T> std::fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
