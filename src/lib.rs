//! Doorlock: a lockable door as a small guarded state machine
//!
//! A [`Door`] holds a secret key and two independent bits, position
//! (open/closed) and lock (locked/unlocked). Four commands move it around:
//! `open`, `close`, `lock` and `unlock`. Each one either succeeds or
//! returns a [`DoorError`] describing why it was refused, leaving the door
//! untouched.
//!
//! # Core Concepts
//!
//! - **State**: the four position/lock combinations as [`core::DoorState`]
//! - **Guards**: ordered preconditions per [`core::Action`]
//! - **History**: every accepted command, timestamped
//!
//! Accepted commands are emitted as `tracing` debug events; install a
//! subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use doorlock::{Door, DoorError};
//!
//! let mut door = Door::new("vault123")?;
//!
//! door.close()?;
//! door.lock();
//! assert_eq!(door.open(), Err(DoorError::LockedDoor));
//!
//! door.unlock("vault123")?;
//! door.open()?;
//! assert!(door.is_open());
//! # Ok::<(), DoorError>(())
//! ```

pub mod builder;
pub mod core;
pub mod door;
pub mod error;

// Re-export commonly used types
pub use builder::DoorBuilder;
pub use door::{Door, Key};
pub use error::{DoorError, Result};
