//! Core door state machine types.
//!
//! This module contains the pure pieces the door is built from:
//! - `DoorState` snapshots and the `Action` vocabulary
//! - Guard predicates that decide which action is allowed
//! - Bounded history of accepted commands

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{DoorHistory, DoorTransition, DEFAULT_HISTORY_LIMIT};
pub use state::{Action, DoorState};
