//! Door states and the actions that move between them.
//!
//! A door carries two independent bits (position and lock). `DoorState`
//! names the four combinations so they can be logged, compared and
//! recorded in history.

use super::guard::Guard;
use crate::error::DoorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a door's position and lock bits.
///
/// # Example
///
/// ```rust
/// use doorlock::core::DoorState;
///
/// let state = DoorState::from_flags(true, true);
/// assert_eq!(state, DoorState::ClosedLocked);
/// assert!(state.is_closed());
/// assert!(state.is_locked());
/// assert_eq!(state.name(), "ClosedLocked");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum DoorState {
    #[default]
    OpenUnlocked,
    OpenLocked,
    ClosedUnlocked,
    ClosedLocked,
}

impl DoorState {
    /// Build a snapshot from the raw `closed` and `locked` flags.
    pub fn from_flags(closed: bool, locked: bool) -> Self {
        match (closed, locked) {
            (false, false) => Self::OpenUnlocked,
            (false, true) => Self::OpenLocked,
            (true, false) => Self::ClosedUnlocked,
            (true, true) => Self::ClosedLocked,
        }
    }

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenUnlocked => "OpenUnlocked",
            Self::OpenLocked => "OpenLocked",
            Self::ClosedUnlocked => "ClosedUnlocked",
            Self::ClosedLocked => "ClosedLocked",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::OpenUnlocked | Self::OpenLocked)
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Self::OpenLocked | Self::ClosedLocked)
    }

    pub fn is_unlocked(&self) -> bool {
        !self.is_locked()
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Commands a door accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    Open,
    Close,
    Lock,
    Unlock,
}

static OPEN_GUARDS: [Guard; 2] = [
    Guard::new(DoorState::is_unlocked, DoorError::LockedDoor),
    Guard::new(DoorState::is_closed, DoorError::OpenDoor),
];

static CLOSE_GUARDS: [Guard; 1] = [Guard::new(DoorState::is_open, DoorError::ClosedDoor)];

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Close => "Close",
            Self::Lock => "Lock",
            Self::Unlock => "Unlock",
        }
    }

    /// Preconditions for this action, in evaluation order.
    ///
    /// The first guard that rejects the current state decides the error,
    /// so a locked door reports `LockedDoor` on open even when it is
    /// already open.
    pub fn guards(&self) -> &'static [Guard] {
        match self {
            Self::Open => &OPEN_GUARDS,
            Self::Close => &CLOSE_GUARDS,
            Self::Lock | Self::Unlock => &[],
        }
    }

    /// State reached when this action is accepted from `from`.
    pub fn target(&self, from: DoorState) -> DoorState {
        match self {
            Self::Open => DoorState::from_flags(false, from.is_locked()),
            Self::Close => DoorState::from_flags(true, from.is_locked()),
            Self::Lock => DoorState::from_flags(from.is_closed(), true),
            Self::Unlock => DoorState::from_flags(from.is_closed(), false),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
