//! Cadence CLI Application
//!
//! Command-line interface for managing recurring activities and running the
//! daily sweep.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{params::ListActivities, SchedulerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    info!(
        "Cadence started with database {}",
        scheduler.database_path().display()
    );

    let cli = Cli::new(scheduler, TerminalRenderer::new(!no_color));

    match command {
        Some(Activity { command }) => cli.handle_activity_command(command).await,
        Some(Recurrence { command }) => cli.handle_recurrence_command(command).await,
        Some(Sweep(args)) => cli.sweep(&args).await,
        None => cli.list_activities(&ListActivities::default()).await,
    }
}
