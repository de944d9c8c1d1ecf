//! Recurrence settings carried by recurring activity templates.

use std::{fmt, str::FromStr};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How often a template spawns a new instance.
///
/// Values that are not one of the four known kinds are kept verbatim in
/// [`RecurrenceType::Unrecognized`] so a template with a bad row can still be
/// loaded, listed and repaired. Such templates never fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Unrecognized(String),
}

impl RecurrenceType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &str {
        match self {
            RecurrenceType::Daily => "daily",
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
            RecurrenceType::Unrecognized(raw) => raw,
        }
    }

    /// Whether this is one of the supported kinds.
    pub fn is_known(&self) -> bool {
        !matches!(self, RecurrenceType::Unrecognized(_))
    }

    /// Conversion used when reading stored rows.
    ///
    /// Stored values must match the lowercase names exactly; anything else,
    /// including `"DAILY"`, is kept as [`RecurrenceType::Unrecognized`].
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "daily" => RecurrenceType::Daily,
            "weekly" => RecurrenceType::Weekly,
            "monthly" => RecurrenceType::Monthly,
            "yearly" => RecurrenceType::Yearly,
            _ => RecurrenceType::Unrecognized(raw.to_string()),
        }
    }
}

impl FromStr for RecurrenceType {
    type Err = String;

    /// Strict parse for user input; unknown kinds are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(RecurrenceType::Daily),
            "weekly" => Ok(RecurrenceType::Weekly),
            "monthly" => Ok(RecurrenceType::Monthly),
            "yearly" => Ok(RecurrenceType::Yearly),
            _ => Err(format!("Invalid recurrence type: {s}")),
        }
    }
}

impl From<String> for RecurrenceType {
    fn from(raw: String) -> Self {
        RecurrenceType::from_stored(&raw)
    }
}

impl From<RecurrenceType> for String {
    fn from(kind: RecurrenceType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recurrence rule and firing state of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    /// Recurrence kind
    #[serde(rename = "recurrenceType")]
    pub kind: RecurrenceType,

    /// Day of week (0 = Sunday) for weekly, day of month (1-31) for monthly
    /// and yearly
    #[serde(rename = "recurrenceDay")]
    pub day: Option<i8>,

    /// Month (1-12), yearly only
    #[serde(rename = "recurrenceMonth")]
    pub month: Option<i8>,

    /// Paused templates are skipped by the sweep
    #[serde(rename = "recurrenceActive")]
    pub active: bool,

    /// Last date an instance was spawned
    pub last_fired_date: Option<Date>,
}

impl Recurrence {
    /// Creates an active rule that has never fired.
    pub fn new(kind: RecurrenceType, day: Option<i8>, month: Option<i8>) -> Self {
        Self {
            kind,
            day,
            month,
            active: true,
            last_fired_date: None,
        }
    }

    /// Daily rule.
    pub fn daily() -> Self {
        Self::new(RecurrenceType::Daily, None, None)
    }

    /// Weekly rule on `weekday` (0 = Sunday).
    pub fn weekly(weekday: i8) -> Self {
        Self::new(RecurrenceType::Weekly, Some(weekday), None)
    }

    /// Monthly rule on `day` of the month.
    pub fn monthly(day: i8) -> Self {
        Self::new(RecurrenceType::Monthly, Some(day), None)
    }

    /// Yearly rule on `day` of `month`.
    pub fn yearly(month: i8, day: i8) -> Self {
        Self::new(RecurrenceType::Yearly, Some(day), Some(month))
    }

    /// Returns the rule with its last-fired marker set.
    pub fn fired_on(mut self, date: Date) -> Self {
        self.last_fired_date = Some(date);
        self
    }
}
