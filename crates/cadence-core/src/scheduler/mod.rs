//! High-level async API over the activity store.
//!
//! [`Scheduler`] is what interfaces (the CLI, a cron wrapper) talk to. Every
//! method opens its own [`Database`](crate::db::Database) connection on
//! tokio's blocking pool, so callers never block the runtime on SQLite.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances with configuration
//! - [`activity_ops`]: Activity creation, listing and status changes
//! - [`template_ops`]: Recurrence settings and the sweep
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use cadence_core::{
//!     params::{CreateActivity, RunSweep, SetRecurrence},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("/tmp/cadence.db"))
//!     .build()
//!     .await?;
//!
//! let activity = scheduler
//!     .create_activity(&CreateActivity {
//!         name: "Stock count".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! scheduler
//!     .set_recurrence(&SetRecurrence {
//!         id: activity.id,
//!         recurrence_type: "monthly".to_string(),
//!         day: Some(31),
//!         month: None,
//!     })
//!     .await?;
//!
//! let summary = scheduler.run_sweep(&RunSweep::default()).await?;
//! println!("{}", summary.message);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{CadenceError, Result},
};

pub mod activity_ops;
pub mod builder;
pub mod template_ops;

#[cfg(test)]
mod tests;

pub use builder::SchedulerBuilder;

/// Main interface for managing activities and running sweeps.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file this scheduler works on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(CadenceError::join)?
    }
}
