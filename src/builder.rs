//! Builder for constructing doors in a chosen initial state.

use crate::core::{DoorHistory, DEFAULT_HISTORY_LIMIT};
use crate::door::{Door, Key};
use crate::error::{DoorError, Result};

/// Builder for constructing a [`Door`] with a fluent API.
///
/// Defaults match [`Door::new`]: open and unlocked. Any combination of
/// position and lock may be requested, including open and locked, which
/// a door also reaches by calling `lock` while open.
///
/// # Example
///
/// ```rust
/// use doorlock::core::DoorState;
/// use doorlock::Door;
///
/// let door = Door::builder()
///     .key("vault123")
///     .closed(true)
///     .locked(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(door.state(), DoorState::ClosedLocked);
/// ```
#[derive(Clone, Debug)]
pub struct DoorBuilder {
    key: Option<String>,
    closed: bool,
    locked: bool,
    history_limit: usize,
}

impl Default for DoorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DoorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            key: None,
            closed: false,
            locked: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Set the key (required).
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Keep at most `limit` accepted commands in the door's history.
    ///
    /// Defaults to [`DEFAULT_HISTORY_LIMIT`]. Zero disables recording.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the door.
    /// Returns `InvalidKey` if the key is missing or empty.
    pub fn build(self) -> Result<Door> {
        let key = self.key.ok_or(DoorError::InvalidKey)?;
        Ok(Door::from_parts(
            Key::new(key)?,
            self.closed,
            self.locked,
            DoorHistory::with_limit(self.history_limit),
        ))
    }
}
