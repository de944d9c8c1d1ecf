//! Clap argument wrappers for each subcommand.
//!
//! Every wrapper converts into the matching `cadence_core::params` type with
//! `From`, so clap attributes stay out of the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```

use cadence_core::params::{
    CreateActivity, Id, ListActivities, RunSweep, SetRecurrence, UpdateStatus,
};
use clap::{Args, Subcommand, ValueEnum};

/// Create a new one-off activity
#[derive(Args)]
pub struct CreateActivityArgs {
    /// Name of the activity
    pub name: String,
    #[arg(short, long, help = "Longer description of the work")]
    pub description: Option<String>,
    #[arg(long, help = "Department that owns the activity")]
    pub department: Option<u64>,
    #[arg(short, long, value_enum, help = "Priority of the activity")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "User the activity is attributed to")]
    pub created_by: Option<String>,
    #[arg(long, help = "Due date as YYYY-MM-DD")]
    pub deadline: Option<String>,
}

impl From<CreateActivityArgs> for CreateActivity {
    fn from(val: CreateActivityArgs) -> Self {
        CreateActivity {
            name: val.name,
            description: val.description,
            department_id: val.department,
            priority: val.priority.map(|p| p.to_string()),
            created_by: val.created_by,
            deadline: val.deadline,
        }
    }
}

/// List activities, soonest deadline first
#[derive(Args)]
pub struct ListActivitiesArgs {
    #[arg(short, long, value_enum, help = "Only activities in this status")]
    pub status: Option<StatusArg>,
    #[arg(long, help = "Only activities of this department")]
    pub department: Option<u64>,
    #[arg(long, help = "Only recurring templates")]
    pub templates: bool,
    #[arg(long, help = "Only instances spawned from this template")]
    pub parent: Option<u64>,
}

impl From<ListActivitiesArgs> for ListActivities {
    fn from(val: ListActivitiesArgs) -> Self {
        ListActivities {
            status: val.status.map(|s| s.into_status()),
            department_id: val.department,
            templates: val.templates,
            parent_id: val.parent,
        }
    }
}

/// Arguments for commands that only take an activity ID
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the activity")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move an activity to a new status
#[derive(Args)]
pub struct UpdateStatusArgs {
    #[arg(help = "Unique identifier of the activity")]
    pub id: u64,
    #[arg(value_enum, help = "New status")]
    pub status: StatusArg,
}

impl From<UpdateStatusArgs> for UpdateStatus {
    fn from(val: UpdateStatusArgs) -> Self {
        UpdateStatus {
            id: val.id,
            status: val.status.into_status().as_str().to_string(),
        }
    }
}

/// Mark an activity as a recurring template
///
/// Weekly rules take `--day` as 0-6 with 0 = Sunday. Monthly rules take
/// `--day` as 1-31; months shorter than the day fire on their last day.
/// Yearly rules take both `--month` and `--day`.
#[derive(Args)]
pub struct SetRecurrenceArgs {
    #[arg(help = "Unique identifier of the activity")]
    pub id: u64,
    #[arg(value_enum, help = "How often the template fires")]
    pub recurrence_type: RecurrenceTypeArg,
    #[arg(long, help = "Day of week (0-6, 0 = Sunday) or day of month (1-31)")]
    pub day: Option<i8>,
    #[arg(long, help = "Month (1-12), yearly rules only")]
    pub month: Option<i8>,
}

impl From<SetRecurrenceArgs> for SetRecurrence {
    fn from(val: SetRecurrenceArgs) -> Self {
        SetRecurrence {
            id: val.id,
            recurrence_type: val.recurrence_type.to_string(),
            day: val.day,
            month: val.month,
        }
    }
}

/// Spawn instances of every template due on the reference date
#[derive(Args)]
pub struct SweepArgs {
    #[arg(long, help = "Reference date as YYYY-MM-DD instead of today")]
    pub date: Option<String>,
    #[arg(long, help = "IANA time zone deciding what today is (default: system zone)")]
    pub timezone: Option<String>,
    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,
}

impl From<&SweepArgs> for RunSweep {
    fn from(val: &SweepArgs) -> Self {
        RunSweep {
            date: val.date.clone(),
            timezone: val.timezone.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum ActivityCommands {
    /// Create a new one-off activity
    #[command(alias = "c")]
    Create(CreateActivityArgs),
    /// List activities
    #[command(alias = "l")]
    List(ListActivitiesArgs),
    /// Show details of an activity
    #[command(alias = "s")]
    Show(IdArgs),
    /// Move an activity to a new status
    Status(UpdateStatusArgs),
}

#[derive(Subcommand)]
pub enum RecurrenceCommands {
    /// Mark an activity as a recurring template
    Set(SetRecurrenceArgs),
    /// Stop a template from firing until resumed
    Pause(IdArgs),
    /// Let a paused template fire again
    Resume(IdArgs),
}

/// Command-line representation of activity statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl StatusArg {
    fn into_status(self) -> cadence_core::ActivityStatus {
        use cadence_core::ActivityStatus;

        match self {
            StatusArg::Pending => ActivityStatus::Pending,
            StatusArg::InProgress => ActivityStatus::InProgress,
            StatusArg::Completed => ActivityStatus::Completed,
            StatusArg::Cancelled => ActivityStatus::Cancelled,
        }
    }
}

/// Command-line representation of priorities
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Urgent => write!(f, "urgent"),
        }
    }
}

/// Command-line representation of recurrence kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RecurrenceTypeArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl std::fmt::Display for RecurrenceTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrenceTypeArg::Daily => write!(f, "daily"),
            RecurrenceTypeArg::Weekly => write!(f, "weekly"),
            RecurrenceTypeArg::Monthly => write!(f, "monthly"),
            RecurrenceTypeArg::Yearly => write!(f, "yearly"),
        }
    }
}
