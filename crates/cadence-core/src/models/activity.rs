//! Activity model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{ActivityStatus, Priority, Recurrence};

/// A stored activity row.
///
/// Recurring templates and the one-off instances they spawn share this shape:
/// a template carries `recurrence`, an instance carries `parent_activity_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: u64,

    /// Short name of the activity
    pub name: String,

    /// Detailed multi-line description
    pub description: Option<String>,

    /// Owning department, opaque to this crate
    pub department_id: Option<u64>,

    /// Priority of the activity
    #[serde(default)]
    pub priority: Priority,

    /// Current lifecycle status
    #[serde(default)]
    pub status: ActivityStatus,

    /// Identifier of the user who created the activity
    pub created_by: Option<String>,

    /// Due date
    pub deadline: Option<Date>,

    /// Template this activity was spawned from
    pub parent_activity_id: Option<u64>,

    /// Recurrence settings, present only on recurring templates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,

    /// Timestamp when the activity was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the activity was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Activity {
    /// Whether this row is a recurring template.
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Whether this row was spawned from a template.
    pub fn is_instance(&self) -> bool {
        self.parent_activity_id.is_some()
    }
}
