//! Command handlers: call the scheduler and render the result.

use anyhow::{Context, Result};
use cadence_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    params::{Id, ListActivities},
    Scheduler,
};
use log::debug;

use crate::{
    commands::{ActivityCommands, RecurrenceCommands, SweepArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_activity_command(&self, command: ActivityCommands) -> Result<()> {
        match command {
            ActivityCommands::Create(args) => {
                let activity = self
                    .scheduler
                    .create_activity(&args.into())
                    .await
                    .context("Failed to create activity")?;
                self.renderer.render(&CreateResult::new(activity).to_string())
            }
            ActivityCommands::List(args) => self.list_activities(&args.into()).await,
            ActivityCommands::Show(args) => {
                let id: Id = args.into();
                let activity = self
                    .scheduler
                    .show_activity(&id)
                    .await
                    .with_context(|| format!("Failed to show activity {}", id.id))?;
                self.renderer.render(&activity.to_string())
            }
            ActivityCommands::Status(args) => {
                let params = args.into();
                let activity = self
                    .scheduler
                    .update_status(&params)
                    .await
                    .context("Failed to update status")?;
                let change = format!("Status: {}", activity.status);
                self.renderer
                    .render(&UpdateResult::with_changes(activity, vec![change]).to_string())
            }
        }
    }

    pub async fn handle_recurrence_command(&self, command: RecurrenceCommands) -> Result<()> {
        match command {
            RecurrenceCommands::Set(args) => {
                let params = args.into();
                let activity = self
                    .scheduler
                    .set_recurrence(&params)
                    .await
                    .context("Failed to set recurrence")?;
                let changes = activity
                    .recurrence
                    .as_ref()
                    .map(|r| vec![format!("Recurs: {r}")])
                    .unwrap_or_default();
                self.renderer
                    .render(&UpdateResult::with_changes(activity, changes).to_string())
            }
            RecurrenceCommands::Pause(args) => {
                let id: Id = args.into();
                self.scheduler
                    .pause_recurrence(&id)
                    .await
                    .with_context(|| format!("Failed to pause template {}", id.id))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Template {} paused", id.id)).to_string(),
                )
            }
            RecurrenceCommands::Resume(args) => {
                let id: Id = args.into();
                self.scheduler
                    .resume_recurrence(&id)
                    .await
                    .with_context(|| format!("Failed to resume template {}", id.id))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Template {} resumed", id.id)).to_string(),
                )
            }
        }
    }

    pub async fn sweep(&self, args: &SweepArgs) -> Result<()> {
        let summary = self
            .scheduler
            .run_sweep(&args.into())
            .await
            .context("Sweep failed")?;

        debug!(
            "Sweep created {} and skipped {}",
            summary.created_count, summary.skipped_count
        );

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).context("Failed to encode summary")?
            );
            Ok(())
        } else {
            self.renderer.render(&summary.to_string())
        }
    }

    pub async fn list_activities(&self, params: &ListActivities) -> Result<()> {
        let activities = self
            .scheduler
            .list_activities(params)
            .await
            .context("Failed to list activities")?;
        self.renderer.render(&activities.to_string())
    }
}
