//! The lockable door.

use crate::builder::DoorBuilder;
use crate::core::{Action, DoorHistory, DoorState, DoorTransition};
use crate::error::{DoorError, Result};
use std::fmt;

/// Secret that authorizes unlocking a door.
///
/// Never empty. Compared by exact equality; `Debug` does not print it.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// Validate and wrap a key, failing with `InvalidKey` when it is empty.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(DoorError::InvalidKey);
        }
        Ok(Self(key))
    }

    /// Check a candidate against this key.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

impl TryFrom<&str> for Key {
    type Error = DoorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Key {
    type Error = DoorError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

/// A door that can be opened, closed, locked and unlocked.
///
/// A new door starts open and unlocked. Position and lock are independent
/// bits: `lock` succeeds even while the door is open, and such a door then
/// refuses to open until it is unlocked with the right key.
///
/// `Door` holds no internal synchronization. Callers sharing one door
/// across threads wrap it themselves, typically in a `Mutex`:
///
/// ```rust
/// use doorlock::Door;
/// use std::sync::{Arc, Mutex};
///
/// let door = Arc::new(Mutex::new(Door::new("vault123").unwrap()));
///
/// let handle = {
///     let door = Arc::clone(&door);
///     std::thread::spawn(move || {
///         let mut guard = door.lock().unwrap();
///         guard.close()
///     })
/// };
/// handle.join().unwrap().unwrap();
///
/// assert!(door.lock().unwrap().is_closed());
/// ```
#[derive(Clone, Debug)]
pub struct Door {
    key: Key,
    is_locked: bool,
    is_closed: bool,
    history: DoorHistory,
}

impl Door {
    /// Create an open, unlocked door guarded by `key`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doorlock::{Door, DoorError};
    ///
    /// let door = Door::new("vault123").unwrap();
    /// assert!(door.is_open());
    /// assert!(door.is_unlocked());
    ///
    /// assert_eq!(Door::new("").unwrap_err(), DoorError::InvalidKey);
    /// ```
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Ok(Self::from_parts(Key::new(key)?, false, false, DoorHistory::new()))
    }

    /// Start a [`DoorBuilder`] for a door in a chosen initial state.
    pub fn builder() -> DoorBuilder {
        DoorBuilder::new()
    }

    pub(crate) fn from_parts(
        key: Key,
        is_closed: bool,
        is_locked: bool,
        history: DoorHistory,
    ) -> Self {
        Self {
            key,
            is_locked,
            is_closed,
            history,
        }
    }

    /// Open the door.
    ///
    /// Fails with `LockedDoor` while locked, which takes priority over
    /// `OpenDoor` when the door is already open.
    pub fn open(&mut self) -> Result<()> {
        self.apply(Action::Open)
    }

    /// Close the door. Fails with `ClosedDoor` when already closed.
    ///
    /// The lock state does not block closing.
    pub fn close(&mut self) -> Result<()> {
        self.apply(Action::Close)
    }

    /// Lock the door. Always succeeds, whatever the position.
    ///
    /// An open door may be locked; there is no closed-first requirement.
    /// It then refuses to open with `LockedDoor` but still closes.
    pub fn lock(&mut self) {
        let from = self.state();
        self.commit(Action::Lock, from);
    }

    /// Unlock the door with `key`.
    ///
    /// Fails with `WrongKey` on mismatch. Unlocking an unlocked door with
    /// the right key succeeds.
    pub fn unlock(&mut self, key: &str) -> Result<()> {
        if !self.key.matches(key) {
            return Err(DoorError::WrongKey);
        }
        self.apply(Action::Unlock)
    }

    pub fn is_open(&self) -> bool {
        !self.is_closed
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    pub fn is_unlocked(&self) -> bool {
        !self.is_locked
    }

    /// Current position and lock as one value.
    pub fn state(&self) -> DoorState {
        DoorState::from_flags(self.is_closed, self.is_locked)
    }

    /// Most recent accepted commands, up to the history limit.
    pub fn history(&self) -> &DoorHistory {
        &self.history
    }

    /// Forget recorded commands without touching the door's state.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Hand the recorded commands to the caller, leaving an empty history
    /// with the same limit in place.
    pub fn take_history(&mut self) -> DoorHistory {
        let empty = DoorHistory::with_limit(self.history.limit());
        std::mem::replace(&mut self.history, empty)
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        let from = self.state();
        for guard in action.guards() {
            guard.check(&from)?;
        }
        self.commit(action, from);
        Ok(())
    }

    fn commit(&mut self, action: Action, from: DoorState) {
        let to = action.target(from);
        self.is_closed = to.is_closed();
        self.is_locked = to.is_locked();
        self.history.record(DoorTransition::now(action, from, to));

        tracing::debug!(
            action = action.name(),
            from = from.name(),
            to = to.name(),
            "door transition accepted"
        );
    }
}
