//! Status and priority enumerations for activities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Activity has not been started
    #[default]
    Pending,

    /// Activity is being worked on
    InProgress,

    /// Activity has been finished
    Completed,

    /// Activity was dropped
    Cancelled,
}

impl FromStr for ActivityStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ActivityStatus::Pending),
            "in_progress" | "inprogress" | "in-progress" => Ok(ActivityStatus::InProgress),
            "completed" | "done" => Ok(ActivityStatus::Completed),
            "cancelled" | "canceled" => Ok(ActivityStatus::Cancelled),
            _ => Err(format!("Invalid activity status: {s}")),
        }
    }
}

impl ActivityStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "pending",
            ActivityStatus::InProgress => "in_progress",
            ActivityStatus::Completed => "completed",
            ActivityStatus::Cancelled => "cancelled",
        }
    }

    /// Whether an activity in this status may move to `next`.
    ///
    /// Finished and cancelled activities can only be reopened to pending.
    /// Moving to the current status is always allowed and treated as a no-op
    /// by callers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::models::ActivityStatus;
    ///
    /// assert!(ActivityStatus::Pending.can_transition_to(ActivityStatus::InProgress));
    /// assert!(ActivityStatus::Completed.can_transition_to(ActivityStatus::Pending));
    /// assert!(!ActivityStatus::Cancelled.can_transition_to(ActivityStatus::Completed));
    /// ```
    pub fn can_transition_to(&self, next: ActivityStatus) -> bool {
        use ActivityStatus::*;

        match (self, next) {
            (a, b) if *a == b => true,
            (Pending, InProgress | Completed | Cancelled) => true,
            (InProgress, Pending | Completed | Cancelled) => true,
            (Completed | Cancelled, Pending) => true,
            _ => false,
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            ActivityStatus::Pending => "○ Pending",
            ActivityStatus::InProgress => "➤ In Progress",
            ActivityStatus::Completed => "✓ Completed",
            ActivityStatus::Cancelled => "✗ Cancelled",
        }
    }
}

/// Priority assigned to an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}
