//! Error kinds reported by door operations.

use thiserror::Error;

/// Errors that can occur when constructing or operating a door.
///
/// The set is closed and every variant is a plain value, so callers can
/// branch with `match` or compare with `==`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DoorError {
    /// Construction was attempted with an empty key.
    #[error("Invalid Key")]
    InvalidKey,

    /// Open was attempted while the door is locked.
    #[error("Door is locked")]
    LockedDoor,

    /// Open was attempted while the door is already open.
    #[error("Door is already open")]
    OpenDoor,

    /// Close was attempted while the door is already closed.
    #[error("Door is already closed")]
    ClosedDoor,

    /// Unlock was attempted with a key that does not match.
    #[error("Wrong Key")]
    WrongKey,
}

/// Result alias for door operations.
pub type Result<T> = std::result::Result<T, DoorError>;
