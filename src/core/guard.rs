//! Guard predicates for controlling door transitions.
//!
//! Guards are pure boolean functions over a `DoorState`. Each one carries
//! the error reported when it rejects a state, so an action's guard list
//! doubles as its error precedence.

use super::state::DoorState;
use crate::error::{DoorError, Result};

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use doorlock::core::{DoorState, Guard};
/// use doorlock::DoorError;
///
/// let must_be_closed = Guard::new(DoorState::is_closed, DoorError::OpenDoor);
///
/// assert!(must_be_closed.allows(&DoorState::ClosedLocked));
/// assert_eq!(
///     must_be_closed.check(&DoorState::OpenUnlocked),
///     Err(DoorError::OpenDoor)
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Guard {
    predicate: fn(&DoorState) -> bool,
    violation: DoorError,
}

impl Guard {
    /// Create a guard from a predicate and the error it reports on rejection.
    pub const fn new(predicate: fn(&DoorState) -> bool, violation: DoorError) -> Self {
        Self {
            predicate,
            violation,
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn allows(&self, state: &DoorState) -> bool {
        (self.predicate)(state)
    }

    /// Like [`Guard::allows`], but reports the guard's error on rejection.
    pub fn check(&self, state: &DoorState) -> Result<()> {
        if self.allows(state) {
            Ok(())
        } else {
            Err(self.violation)
        }
    }

    /// Error this guard reports when it rejects a state.
    pub fn violation(&self) -> DoorError {
        self.violation
    }
}
