//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with termimad or print it
//! as plain text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Activity, ActivityStatus, Priority, Recurrence, RecurrenceType, SweepSummary,
};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Recurrence {
    /// Human readable rule, e.g. "monthly on day 31" or "weekly on Monday".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.day, self.month) {
            (RecurrenceType::Daily, _, _) => write!(f, "daily")?,
            (RecurrenceType::Weekly, Some(day), _) => match lookup(&WEEKDAYS, day, 0) {
                Some(name) => write!(f, "weekly on {name}")?,
                None => write!(f, "weekly on day {day}")?,
            },
            (RecurrenceType::Monthly, Some(day), _) => write!(f, "monthly on day {day}")?,
            (RecurrenceType::Yearly, Some(day), Some(month)) => match lookup(&MONTHS, month, 1) {
                Some(name) => write!(f, "yearly on {name} {day}")?,
                None => write!(f, "yearly on month {month} day {day}")?,
            },
            (kind, _, _) => write!(f, "{kind} (incomplete rule)")?,
        }

        if !self.active {
            write!(f, ", paused")?;
        }
        Ok(())
    }
}

fn lookup(names: &[&'static str], value: i8, first: i8) -> Option<&'static str> {
    let index = usize::try_from(value.checked_sub(first)?).ok()?;
    names.get(index).copied()
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Priority: {}", self.priority)?;
        if let Some(deadline) = &self.deadline {
            writeln!(f, "- Deadline: {deadline}")?;
        }
        if let Some(department) = self.department_id {
            writeln!(f, "- Department: {department}")?;
        }
        if let Some(created_by) = &self.created_by {
            writeln!(f, "- Created by: {created_by}")?;
        }
        if let Some(recurrence) = &self.recurrence {
            writeln!(f, "- Recurs: {recurrence}")?;
            if let Some(last) = &recurrence.last_fired_date {
                writeln!(f, "- Last fired: {last}")?;
            }
        }
        if let Some(parent) = self.parent_activity_id {
            writeln!(f, "- Spawned from: {parent}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if self.already_fired_count > 0 {
            writeln!(
                f,
                "- Already fired today: {}",
                self.already_fired_count
            )?;
        }
        if self.skipped_count > 0 {
            writeln!(
                f,
                "- Skipped (unrecognized recurrence): {}",
                self.skipped_count
            )?;
        }

        if !self.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Errors")?;
            writeln!(f)?;
            for failure in &self.errors {
                writeln!(f, "- Template {}: {}", failure.template_id, failure.message)?;
            }
        }

        Ok(())
    }
}
