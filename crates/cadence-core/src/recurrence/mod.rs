//! Date rules deciding when a recurring template fires and what deadline the
//! spawned instance gets.
//!
//! Everything here is pure: the functions look only at a [`Recurrence`] and a
//! reference date. Reading templates and writing instances is the job of
//! [`crate::sweep`].
//!
//! # Firing rules
//!
//! | kind    | fires when                                                        |
//! |---------|-------------------------------------------------------------------|
//! | daily   | every day                                                         |
//! | weekly  | weekday (0 = Sunday) equals `day`                                 |
//! | monthly | day of month equals `day`, or it is the last day of a month shorter than `day` |
//! | yearly  | month equals `month` and the monthly rule holds inside that month |
//!
//! No rule fires twice on the date stored in `last_fired_date`, and
//! unrecognized kinds never fire.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::{models::Recurrence, recurrence};
//! use jiff::civil::date;
//!
//! // Anchored to the 31st, so April fires on its last day.
//! let rule = Recurrence::monthly(31);
//! let evaluation = recurrence::evaluate(&rule, date(2024, 4, 30))?;
//! assert!(evaluation.should_fire);
//! assert_eq!(evaluation.deadline, Some(date(2024, 5, 31)));
//!
//! // Once fired, the same day is a no-op.
//! let rule = rule.fired_on(date(2024, 4, 30));
//! assert!(!recurrence::should_fire_today(&rule, date(2024, 4, 30)));
//! # Ok::<(), cadence_core::CadenceError>(())
//! ```

use jiff::{civil::Date, ToSpan};
use serde::Serialize;

use crate::{
    error::{DateResultExt, Result},
    models::{Recurrence, RecurrenceType, RecurringTemplate},
};


/// Result of evaluating one template against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Whether an instance must be spawned
    pub should_fire: bool,
    /// Deadline of that instance; `None` when nothing fires
    pub deadline: Option<Date>,
}

impl Evaluation {
    /// Nothing to do for this template today.
    pub const IDLE: Evaluation = Evaluation {
        should_fire: false,
        deadline: None,
    };
}

/// Decides whether `rule` fires on `today` and, if so, computes the deadline.
pub fn evaluate(rule: &Recurrence, today: Date) -> Result<Evaluation> {
    if !should_fire_today(rule, today) {
        return Ok(Evaluation::IDLE);
    }

    Ok(Evaluation {
        should_fire: true,
        deadline: Some(compute_deadline(rule, today)?),
    })
}

/// Whether `rule` fires on `today`.
pub fn should_fire_today(rule: &Recurrence, today: Date) -> bool {
    if rule.last_fired_date == Some(today) {
        return false;
    }

    match rule.kind {
        RecurrenceType::Daily => true,
        RecurrenceType::Weekly => rule.day == Some(weekday_index(today)),
        RecurrenceType::Monthly => rule.day.is_some_and(|day| matches_day(today, day)),
        RecurrenceType::Yearly => {
            rule.month == Some(today.month()) && rule.day.is_some_and(|day| matches_day(today, day))
        }
        RecurrenceType::Unrecognized(_) => false,
    }
}

/// Deadline for an instance spawned on `today`.
///
/// Monthly and yearly deadlines land on the anchor day of the following
/// month or year, clamped to that month's length. Without an anchor day the
/// firing day of month is used, with the same clamp.
pub fn compute_deadline(rule: &Recurrence, today: Date) -> Result<Date> {
    match rule.kind {
        RecurrenceType::Daily | RecurrenceType::Unrecognized(_) => Ok(today),
        RecurrenceType::Weekly => today
            .checked_add(7.days())
            .date_context("Weekly deadline is out of range"),
        RecurrenceType::Monthly => {
            let next_month = today
                .first_of_month()
                .checked_add(1.month())
                .date_context("Monthly deadline is out of range")?;
            clamped_day(next_month, rule.day.unwrap_or(today.day()))
        }
        RecurrenceType::Yearly => {
            let month = rule.month.unwrap_or(today.month());
            let next_year = today
                .first_of_month()
                .checked_add(1.year())
                .date_context("Yearly deadline is out of range")?;
            let first = Date::new(next_year.year(), month, 1)
                .date_context("Yearly deadline is out of range")?;
            clamped_day(first, rule.day.unwrap_or(today.day()))
        }
    }
}

/// Day of week with Sunday as 0.
pub fn weekday_index(date: Date) -> i8 {
    date.weekday().to_sunday_zero_offset()
}

/// Whether `today` is the anchor `day`, or stands in for it at the end of a
/// month that has fewer days.
fn matches_day(today: Date, day: i8) -> bool {
    today.day() == day || (today == today.last_of_month() && day > today.days_in_month())
}

/// `day` within the month of `first`, clamped to the month's length.
fn clamped_day(first: Date, day: i8) -> Result<Date> {
    let day = day.clamp(1, first.days_in_month());
    first
        .with()
        .day(day)
        .build()
        .date_context("Failed to build deadline")
}

impl RecurringTemplate {
    /// See [`evaluate`].
    pub fn evaluate(&self, today: Date) -> Result<Evaluation> {
        evaluate(&self.recurrence, today)
    }

    /// See [`should_fire_today`].
    pub fn should_fire_today(&self, today: Date) -> bool {
        should_fire_today(&self.recurrence, today)
    }

    /// See [`compute_deadline`].
    pub fn compute_deadline(&self, today: Date) -> Result<Date> {
        compute_deadline(&self.recurrence, today)
    }
}
