//! Recurring template and spawned-instance types used by the sweep.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Activity, Priority, Recurrence};

/// A root activity marked as recurring, as read by the sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTemplate {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<u64>,
    pub priority: Priority,
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub recurrence: Recurrence,
}

impl RecurringTemplate {
    /// Builds the row to insert when this template fires with `deadline`.
    pub fn instance(&self, deadline: Date) -> NewInstance {
        NewInstance {
            name: self.name.clone(),
            description: self.description.clone(),
            department_id: self.department_id,
            priority: self.priority,
            created_by: self.created_by.clone(),
            deadline,
            parent_activity_id: self.id,
        }
    }
}

impl TryFrom<Activity> for RecurringTemplate {
    type Error = Activity;

    /// Fails, handing the activity back, when it carries no recurrence.
    fn try_from(activity: Activity) -> Result<Self, Self::Error> {
        match activity.recurrence {
            Some(recurrence) => Ok(Self {
                id: activity.id,
                name: activity.name,
                description: activity.description,
                department_id: activity.department_id,
                priority: activity.priority,
                created_by: activity.created_by,
                recurrence,
            }),
            None => Err(activity),
        }
    }
}

/// Fields of a concrete activity spawned from a template.
///
/// Instances are always inserted as pending and non-recurring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstance {
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<u64>,
    pub priority: Priority,
    pub created_by: Option<String>,
    pub deadline: Date,
    pub parent_activity_id: u64,
}
