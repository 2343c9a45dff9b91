//! Property-based tests for the door state machine.
//!
//! These tests use proptest to drive doors through random command
//! sequences and check that the invariants hold after every step.

use doorlock::core::{Action, DoorState};
use doorlock::{Door, DoorError};
use proptest::prelude::*;

const KEY: &str = "vault123";

#[derive(Clone, Debug)]
enum Command {
    Open,
    Close,
    Lock,
    Unlock(String),
}

prop_compose! {
    fn arbitrary_state()(closed in any::<bool>(), locked in any::<bool>()) -> DoorState {
        DoorState::from_flags(closed, locked)
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Open),
        Just(Command::Close),
        Just(Command::Lock),
        Just(Command::Unlock(KEY.to_string())),
        "[a-z0-9]{0,10}".prop_map(Command::Unlock),
    ]
}

fn run(door: &mut Door, command: &Command) -> Result<(), DoorError> {
    match command {
        Command::Open => door.open(),
        Command::Close => door.close(),
        Command::Lock => {
            door.lock();
            Ok(())
        }
        Command::Unlock(key) => door.unlock(key),
    }
}

proptest! {
    #[test]
    fn queries_are_always_consistent(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut door = Door::new(KEY).unwrap();

        for command in &commands {
            let _ = run(&mut door, command);
            prop_assert_ne!(door.is_open(), door.is_closed());
            prop_assert_ne!(door.is_locked(), door.is_unlocked());
            prop_assert_eq!(door.state(), DoorState::from_flags(door.is_closed(), door.is_locked()));
        }
    }

    #[test]
    fn failed_commands_leave_door_untouched(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut door = Door::new(KEY).unwrap();

        for command in &commands {
            let before = door.state();
            let recorded = door.history().len();

            if run(&mut door, command).is_err() {
                prop_assert_eq!(door.state(), before);
                prop_assert_eq!(door.history().len(), recorded);
            } else {
                prop_assert_eq!(
                    door.history().len(),
                    (recorded + 1).min(door.history().limit())
                );
            }
        }
    }

    #[test]
    fn history_path_tracks_state(
        limit in 1..20usize,
        commands in prop::collection::vec(arbitrary_command(), 0..100)
    ) {
        let mut door = Door::builder().key(KEY).history_limit(limit).build().unwrap();
        let mut accepted = 0;
        for command in &commands {
            if run(&mut door, command).is_ok() {
                accepted += 1;
            }
        }
        // Lock always succeeds, so the history is never empty here.
        door.lock();
        accepted += 1;

        let history = door.history();
        let path = history.get_path();

        prop_assert!(!history.is_empty());
        prop_assert_eq!(history.len(), accepted.min(limit));
        prop_assert_eq!(path.len(), history.len() + 1);
        prop_assert_eq!(path[path.len() - 1], door.state());
        for pair in history.transitions().windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
        }
        if accepted <= limit {
            prop_assert_eq!(path[0], DoorState::OpenUnlocked);
        }
    }

    #[test]
    fn locked_door_never_opens(state in arbitrary_state()) {
        let mut door = Door::builder()
            .key(KEY)
            .closed(state.is_closed())
            .locked(true)
            .build()
            .unwrap();

        prop_assert_eq!(door.open(), Err(DoorError::LockedDoor));
        prop_assert!(door.is_locked());
    }

    #[test]
    fn only_the_exact_key_unlocks(candidate in "[a-zA-Z0-9]{0,12}") {
        let mut door = Door::builder().key(KEY).closed(true).locked(true).build().unwrap();

        let result = door.unlock(&candidate);
        if candidate == KEY {
            prop_assert_eq!(result, Ok(()));
            prop_assert!(door.is_unlocked());
        } else {
            prop_assert_eq!(result, Err(DoorError::WrongKey));
            prop_assert!(door.is_locked());
        }
    }

    #[test]
    fn guards_agree_with_door(state in arbitrary_state()) {
        for action in [Action::Open, Action::Close] {
            let mut door = Door::builder()
                .key(KEY)
                .closed(state.is_closed())
                .locked(state.is_locked())
                .build()
                .unwrap();

            let expected = action
                .guards()
                .iter()
                .find_map(|g| g.check(&state).err());
            let result = match action {
                Action::Open => door.open(),
                _ => door.close(),
            };

            prop_assert_eq!(result.err(), expected);
        }
    }

    #[test]
    fn any_nonempty_key_constructs(key in ".{1,32}") {
        let door = Door::new(key).unwrap();
        prop_assert!(door.is_open());
        prop_assert!(door.is_unlocked());
    }
}
