//! Parameter structures for cadence operations
//!
//! These structures are shared by every interface (currently the CLI) and
//! carry no framework-specific derives. Interface layers define their own
//! argument types and convert into these with `From`:
//!
//! ```text
//! CLI Args (clap) → Core Params → validate() → Scheduler
//! ```
//!
//! Free-form fields (status names, dates, recurrence kinds) stay as strings
//! here and are parsed by the `validate` methods, so every interface gets the
//! same error messages.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    error::{CadenceError, Result},
    models::{ActivityStatus, Priority, Recurrence, RecurrenceType},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a new one-off activity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateActivity {
    /// Name of the activity (required)
    pub name: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Owning department
    pub department_id: Option<u64>,
    /// Priority name ('low', 'medium', 'high', 'urgent'); defaults to medium
    pub priority: Option<String>,
    /// User the activity is attributed to
    pub created_by: Option<String>,
    /// Due date as `YYYY-MM-DD`
    pub deadline: Option<String>,
}

/// Validated form of [`CreateActivity`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedActivity {
    pub name: String,
    pub description: Option<String>,
    pub department_id: Option<u64>,
    pub priority: Priority,
    pub created_by: Option<String>,
    pub deadline: Option<Date>,
}

impl CreateActivity {
    /// Validate creation parameters.
    ///
    /// # Errors
    ///
    /// * `CadenceError::InvalidInput` - empty name, unknown priority or a
    ///   deadline that is not a `YYYY-MM-DD` date
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{models::Priority, params::CreateActivity};
    ///
    /// let params = CreateActivity {
    ///     name: "Inventory check".to_string(),
    ///     priority: Some("high".to_string()),
    ///     deadline: Some("2024-03-01".to_string()),
    ///     ..Default::default()
    /// };
    /// let activity = params.validate()?;
    /// assert_eq!(activity.priority, Priority::High);
    /// assert_eq!(activity.deadline.unwrap().to_string(), "2024-03-01");
    /// # Ok::<(), cadence_core::CadenceError>(())
    /// ```
    pub fn validate(&self) -> Result<ValidatedActivity> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CadenceError::invalid_input("name").with_reason("Name cannot be empty"));
        }

        let priority = match self.priority.as_deref() {
            Some(raw) => raw
                .parse::<Priority>()
                .map_err(|e| CadenceError::invalid_input("priority").with_reason(e))?,
            None => Priority::default(),
        };

        let deadline = self
            .deadline
            .as_deref()
            .map(|raw| parse_date("deadline", raw))
            .transpose()?;

        Ok(ValidatedActivity {
            name: name.to_string(),
            description: self.description.clone(),
            department_id: self.department_id,
            priority,
            created_by: self.created_by.clone(),
            deadline,
        })
    }
}

/// Parameters for listing activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListActivities {
    /// Only activities in this status
    pub status: Option<ActivityStatus>,
    /// Only activities of this department
    pub department_id: Option<u64>,
    /// Only recurring templates
    #[serde(default)]
    pub templates: bool,
    /// Only instances spawned from this template
    pub parent_id: Option<u64>,
}

/// Parameters for moving an activity to a new status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStatus {
    /// Activity ID
    pub id: u64,
    /// New status ('pending', 'in_progress', 'completed', 'cancelled')
    pub status: String,
}

impl UpdateStatus {
    /// Parse the requested status.
    pub fn validate(&self) -> Result<ActivityStatus> {
        self.status
            .parse::<ActivityStatus>()
            .map_err(|e| CadenceError::invalid_input("status").with_reason(e))
    }
}

/// Parameters for marking an activity as a recurring template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetRecurrence {
    /// Activity ID
    pub id: u64,
    /// 'daily', 'weekly', 'monthly' or 'yearly'
    pub recurrence_type: String,
    /// Day of week (0 = Sunday) for weekly, day of month for monthly/yearly
    pub day: Option<i8>,
    /// Month (1-12) for yearly
    pub month: Option<i8>,
}

impl SetRecurrence {
    /// Validate the rule against the invariants of its recurrence type.
    ///
    /// Daily rules drop any day or month given. Weekly rules keep only the
    /// day; monthly rules keep only the day; yearly rules keep both.
    ///
    /// # Errors
    ///
    /// * `CadenceError::InvalidInput` - unknown type, or a missing or out of
    ///   range day/month for the type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::params::SetRecurrence;
    ///
    /// let params = SetRecurrence {
    ///     id: 1,
    ///     recurrence_type: "weekly".to_string(),
    ///     day: Some(7),
    ///     month: None,
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<Recurrence> {
        let kind = self
            .recurrence_type
            .parse::<RecurrenceType>()
            .map_err(|e| CadenceError::invalid_input("recurrence_type").with_reason(e))?;

        let recurrence = match kind {
            RecurrenceType::Daily => Recurrence::daily(),
            RecurrenceType::Weekly => Recurrence::weekly(require_in_range("day", self.day, 0, 6)?),
            RecurrenceType::Monthly => {
                Recurrence::monthly(require_in_range("day", self.day, 1, 31)?)
            }
            RecurrenceType::Yearly => {
                let month = require_in_range("month", self.month, 1, 12)?;
                let day = require_in_range("day", self.day, 1, 31)?;
                Recurrence::yearly(month, day)
            }
            RecurrenceType::Unrecognized(raw) => {
                return Err(CadenceError::invalid_input("recurrence_type")
                    .with_reason(format!("Invalid recurrence type: {raw}")))
            }
        };

        Ok(recurrence)
    }
}

/// Parameters for a sweep run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSweep {
    /// Reference date as `YYYY-MM-DD`; defaults to today
    pub date: Option<String>,
    /// IANA time zone used to decide what "today" is; defaults to the system
    /// zone
    pub timezone: Option<String>,
}

impl RunSweep {
    /// Resolve the reference date for the run.
    ///
    /// An explicit `date` wins over the clock; otherwise the current instant
    /// is converted to a civil date in `timezone`.
    pub fn resolve_today(&self) -> Result<Date> {
        if let Some(raw) = self.date.as_deref() {
            return parse_date("date", raw);
        }

        let tz = match self.timezone.as_deref() {
            Some(name) => TimeZone::get(name)
                .map_err(|e| CadenceError::invalid_input("timezone").with_reason(e.to_string()))?,
            None => TimeZone::system(),
        };
        Ok(Timestamp::now().to_zoned(tz).date())
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|e| {
        CadenceError::invalid_input(field).with_reason(format!("'{raw}' is not a YYYY-MM-DD date: {e}"))
    })
}

fn require_in_range(field: &str, value: Option<i8>, min: i8, max: i8) -> Result<i8> {
    match value {
        Some(v) if (min..=max).contains(&v) => Ok(v),
        Some(v) => Err(CadenceError::invalid_input(field)
            .with_reason(format!("{v} is outside the allowed range {min}-{max}"))),
        None => Err(CadenceError::invalid_input(field)
            .with_reason(format!("required for this recurrence type ({min}-{max})"))),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_set_recurrence_daily_ignores_day_and_month() {
        let params = SetRecurrence {
            id: 1,
            recurrence_type: "daily".to_string(),
            day: Some(40),
            month: Some(13),
        };
        assert_eq!(params.validate().unwrap(), Recurrence::daily());
    }

    #[test]
    fn test_set_recurrence_monthly_requires_day() {
        let params = SetRecurrence {
            id: 1,
            recurrence_type: "monthly".to_string(),
            day: None,
            month: None,
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, CadenceError::InvalidInput { ref field, .. } if field == "day"));
    }

    #[test]
    fn test_set_recurrence_yearly_validates_month() {
        let params = SetRecurrence {
            id: 1,
            recurrence_type: "Yearly".to_string(),
            day: Some(29),
            month: Some(0),
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, CadenceError::InvalidInput { ref field, .. } if field == "month"));

        let params = SetRecurrence {
            month: Some(2),
            ..params
        };
        assert_eq!(params.validate().unwrap(), Recurrence::yearly(2, 29));
    }

    #[test]
    fn test_set_recurrence_rejects_unknown_type() {
        let params = SetRecurrence {
            id: 1,
            recurrence_type: "fortnightly".to_string(),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_create_activity_rejects_blank_name_and_bad_deadline() {
        let blank = CreateActivity {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(blank.validate().is_err());

        let bad_deadline = CreateActivity {
            name: "Audit".to_string(),
            deadline: Some("2024-02-30".to_string()),
            ..Default::default()
        };
        assert!(bad_deadline.validate().is_err());
    }

    #[test]
    fn test_create_activity_defaults_to_medium_priority() {
        let params = CreateActivity {
            name: "  Audit ".to_string(),
            ..Default::default()
        };
        let activity = params.validate().unwrap();
        assert_eq!(activity.name, "Audit");
        assert_eq!(activity.priority, Priority::Medium);
        assert_eq!(activity.deadline, None);
    }

    #[test]
    fn test_update_status_parses_aliases() {
        let params = UpdateStatus {
            id: 1,
            status: "in-progress".to_string(),
        };
        assert_eq!(params.validate().unwrap(), ActivityStatus::InProgress);
    }

    #[test]
    fn test_run_sweep_explicit_date_wins() {
        let params = RunSweep {
            date: Some("2024-04-30".to_string()),
            timezone: Some("Not/AZone".to_string()),
        };
        assert_eq!(params.resolve_today().unwrap(), date(2024, 4, 30));
    }

    #[test]
    fn test_run_sweep_rejects_unknown_timezone() {
        let params = RunSweep {
            date: None,
            timezone: Some("Not/AZone".to_string()),
        };
        assert!(params.resolve_today().is_err());
    }
}
