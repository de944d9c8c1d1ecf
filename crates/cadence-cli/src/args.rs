use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{ActivityCommands, RecurrenceCommands, SweepArgs};

/// Command line for Cadence, a store of activities where recurring templates
/// spawn dated instances.
///
/// Run `cadence sweep` once a day (for example from cron) to spawn the
/// instances of every template that is due.
#[derive(Parser)]
#[command(version, about, name = "cadence")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/cadence/cadence.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadence CLI
///
/// Without a command, all activities are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage activities
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Mark activities as recurring templates, pause or resume them
    #[command(alias = "r")]
    Recurrence {
        #[command(subcommand)]
        command: RecurrenceCommands,
    },
    /// Spawn instances of every template due today
    Sweep(SweepArgs),
}
