//! CLI interface for Waymark.
//!
//! Running `waymark` with no subcommand opens the interactive session view.
//! The subcommands are non-interactive: arguments in, text out.

mod format;

use clap::{Parser, Subcommand};

use crate::storage::{Result, Storage};

use format::format_workout;

/// Waymark — log workouts where they happened.
#[derive(Debug, Parser)]
#[command(name = "waymark")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the logged workouts, oldest first.
    List,

    /// Clear every logged workout. There is no per-entry delete.
    Reset,
}

/// Prints every saved workout, one line each.
pub fn list(storage: &Storage) -> Result<()> {
    let workouts = storage.load()?;
    if workouts.is_empty() {
        println!("No workouts logged yet.");
        return Ok(());
    }
    for workout in &workouts {
        println!("{}", format_workout(workout));
    }
    Ok(())
}

/// Clears the saved collection.
pub fn reset(storage: &Storage) -> Result<()> {
    storage.reset()?;
    println!("Cleared all logged workouts.");
    Ok(())
}
