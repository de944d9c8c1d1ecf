//! Recurring template operations and the sweep for the Scheduler.

use log::info;

use super::Scheduler;
use crate::{
    error::Result,
    models::{Activity, SweepSummary},
    params::{Id, RunSweep, SetRecurrence},
    sweep::{self, LoadedTemplate},
};

impl Scheduler {
    /// Marks an activity as a recurring template.
    pub async fn set_recurrence(&self, params: &SetRecurrence) -> Result<Activity> {
        let recurrence = params.validate()?;
        let id = params.id;
        self.with_database(move |db| db.set_recurrence(id, &recurrence))
            .await
    }

    /// Stops a template from being swept until it is resumed.
    pub async fn pause_recurrence(&self, params: &Id) -> Result<Activity> {
        let id = params.id;
        self.with_database(move |db| db.set_recurrence_active(id, false))
            .await
    }

    /// Makes a paused template eligible for sweeps again.
    pub async fn resume_recurrence(&self, params: &Id) -> Result<Activity> {
        let id = params.id;
        self.with_database(move |db| db.set_recurrence_active(id, true))
            .await
    }

    /// Templates the next sweep will examine, with rows that cannot be read
    /// reported individually.
    pub async fn active_templates(&self) -> Result<Vec<LoadedTemplate>> {
        self.with_database(|db| db.list_active_templates()).await
    }

    /// Runs one sweep for the date resolved from `params`.
    ///
    /// Per-template failures are returned in the summary; only a failure to
    /// read the templates is an error.
    pub async fn run_sweep(&self, params: &RunSweep) -> Result<SweepSummary> {
        let today = params.resolve_today()?;
        let summary = self
            .with_database(move |db| sweep::run_sweep(db, today))
            .await?;
        info!("{}", summary.message);
        Ok(summary)
    }
}
