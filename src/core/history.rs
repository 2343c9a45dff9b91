//! Transition history tracking.
//!
//! Every command a door accepts is recorded as a `DoorTransition`.
//! Rejected commands leave no trace.

use super::state::{Action, DoorState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted command.
///
/// `from` and `to` may be equal: locking a locked door or unlocking an
/// unlocked one is accepted without changing state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorTransition {
    /// The command that was accepted
    pub action: Action,
    /// The state before the command
    pub from: DoorState,
    /// The state after the command
    pub to: DoorState,
    /// When the command was accepted
    pub timestamp: DateTime<Utc>,
}

impl DoorTransition {
    /// Record `action` moving from `from` to `to`, stamped with the current time.
    pub fn now(action: Action, from: DoorState, to: DoorState) -> Self {
        Self {
            action,
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// Whether the command changed the door's state.
    pub fn changed_state(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded history of accepted commands.
///
/// Keeps the most recent [`DEFAULT_HISTORY_LIMIT`] transitions unless built
/// with [`DoorHistory::with_limit`].
///
/// # Example
///
/// ```rust
/// use doorlock::core::{Action, DoorHistory, DoorState, DoorTransition};
///
/// let mut history = DoorHistory::new();
/// history.record(DoorTransition::now(
///     Action::Close,
///     DoorState::OpenUnlocked,
///     DoorState::ClosedUnlocked,
/// ));
/// history.record(DoorTransition::now(
///     Action::Lock,
///     DoorState::ClosedUnlocked,
///     DoorState::ClosedLocked,
/// ));
///
/// let path = history.get_path();
/// assert_eq!(
///     path,
///     vec![
///         DoorState::OpenUnlocked,
///         DoorState::ClosedUnlocked,
///         DoorState::ClosedLocked,
///     ]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorHistory {
    transitions: Vec<DoorTransition>,
    #[serde(default = "default_limit")]
    limit: usize,
}

/// Number of transitions a history keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for DoorHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl DoorHistory {
    /// Create a new empty history holding at most [`DEFAULT_HISTORY_LIMIT`]
    /// transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty history holding at most `limit` transitions.
    ///
    /// Once full, recording a transition drops the oldest one. A limit of
    /// zero records nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doorlock::core::{Action, DoorHistory, DoorState, DoorTransition};
    ///
    /// let mut history = DoorHistory::with_limit(2);
    /// for _ in 0..5 {
    ///     history.record(DoorTransition::now(
    ///         Action::Lock,
    ///         DoorState::ClosedLocked,
    ///         DoorState::ClosedLocked,
    ///     ));
    /// }
    ///
    /// assert_eq!(history.len(), 2);
    /// ```
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit,
        }
    }

    /// Append a transition, dropping the oldest ones beyond the limit.
    pub fn record(&mut self, transition: DoorTransition) {
        if self.limit == 0 {
            return;
        }
        self.transitions.push(transition);
        if self.transitions.len() > self.limit {
            let excess = self.transitions.len() - self.limit;
            self.transitions.drain(..excess);
        }
    }

    /// Forget every recorded transition. The limit is kept.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Get the path of states traversed.
    ///
    /// Returns the oldest retained transition's `from` state, then the `to`
    /// state of each transition. Empty when nothing is recorded.
    pub fn get_path(&self) -> Vec<DoorState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the oldest and newest retained transition.
    ///
    /// Returns `None` if nothing is recorded, or if the newest timestamp is
    /// earlier than the oldest (possible for deserialized or hand-built
    /// histories, or after a wall-clock step backwards).
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[DoorTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&DoorTransition> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
