//! Vault Door
//!
//! This example walks a door through close, lock, a refused open,
//! unlock and open, printing each outcome.
//!
//! Key concepts:
//! - Refused commands come back as `DoorError` values
//! - Accepted commands show up as `tracing` debug events
//! - History of accepted commands
//!
//! Run with: RUST_LOG=debug cargo run --example vault_door

use doorlock::{Door, DoorError};

fn main() -> Result<(), DoorError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Vault Door Example ===\n");

    let mut door = Door::new("vault123")?;
    println!("Initial state: {}", door.state());

    door.close()?;
    door.lock();
    println!("After close + lock: {}", door.state());

    match door.open() {
        Ok(()) => println!("Opened (unexpected)"),
        Err(err) => println!("Open refused: {err}"),
    }

    if let Err(err) = door.unlock("letmein") {
        println!("Unlock refused: {err}");
    }

    door.unlock("vault123")?;
    door.open()?;
    println!("Final state: {}", door.state());

    println!("\nAccepted commands:");
    for transition in door.history().transitions() {
        println!("  {} : {} -> {}", transition.action, transition.from, transition.to);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
