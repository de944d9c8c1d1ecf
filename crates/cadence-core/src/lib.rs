//! Core library for Cadence, a store of activities where some activities are
//! recurring templates that periodically spawn one-off instances.
//!
//! The crate is split into a pure date-rule engine and the plumbing around
//! it:
//!
//! - [`recurrence`]: decides whether a template fires on a date and computes
//!   the deadline of the spawned instance
//! - [`sweep`]: one pass over every active template, behind the
//!   [`ActivityStore`] trait
//! - [`db`]: SQLite storage implementing [`ActivityStore`]
//! - [`scheduler`]: async facade used by interfaces such as the CLI
//! - [`display`]: markdown formatting of models and operation results
//!
//! # Quick Start
//!
//! ```rust
//! use cadence_core::{
//!     params::{CreateActivity, RunSweep, SetRecurrence},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let report = scheduler
//!     .create_activity(&CreateActivity {
//!         name: "Weekly report".to_string(),
//!         priority: Some("high".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! scheduler
//!     .set_recurrence(&SetRecurrence {
//!         id: report.id,
//!         recurrence_type: "weekly".to_string(),
//!         day: Some(1),
//!         month: None,
//!     })
//!     .await?;
//!
//! let summary = scheduler
//!     .run_sweep(&RunSweep {
//!         date: Some("2024-01-15".to_string()),
//!         timezone: None,
//!     })
//!     .await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod recurrence;
pub mod scheduler;
pub mod sweep;

// Re-export commonly used types
pub use db::Database;
pub use display::{Activities, CreateResult, LocalDateTime, OperationStatus, UpdateResult};
pub use error::{CadenceError, Result};
pub use models::{
    Activity, ActivityFilter, ActivityStatus, NewInstance, Priority, Recurrence, RecurrenceType,
    RecurringTemplate, SweepSummary, TemplateFailure,
};
pub use params::{CreateActivity, Id, ListActivities, RunSweep, SetRecurrence, UpdateStatus};
pub use recurrence::Evaluation;
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use sweep::{run_sweep, ActivityStore, FireOutcome, LoadedTemplate};
