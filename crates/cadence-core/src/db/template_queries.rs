//! Recurring template settings and firing.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::activity_queries::ACTIVITY_COLUMNS;
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Activity, NewInstance, Recurrence, RecurringTemplate, TemplateFailure},
    sweep::{ActivityStore, FireOutcome, LoadedTemplate},
};

const SELECT_PARENT_SQL: &str = "SELECT parent_activity_id FROM activities WHERE id = ?1";
const SET_RECURRENCE_SQL: &str = "UPDATE activities SET is_recurring = 1, recurrence_type = ?1, recurrence_day = ?2, recurrence_month = ?3, recurrence_active = 1, last_fired_date = CASE WHEN date(last_fired_date) IS last_fired_date THEN last_fired_date END, updated_at = ?4 WHERE id = ?5";
const SET_RECURRENCE_ACTIVE_SQL: &str = "UPDATE activities SET recurrence_active = ?1, updated_at = ?2 WHERE id = ?3 AND is_recurring = 1";
const CLAIM_FIRING_SQL: &str = "UPDATE activities SET last_fired_date = ?1, updated_at = ?2 WHERE id = ?3 AND is_recurring = 1 AND (last_fired_date IS NULL OR last_fired_date <> ?1)";
const INSERT_INSTANCE_SQL: &str = "INSERT INTO activities (name, description, department_id, priority, status, created_by, deadline, parent_activity_id, is_recurring, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 'pending', ?5, ?6, ?7, 0, ?8, ?9)";

impl super::Database {
    /// Marks a root activity as a recurring template with `recurrence`.
    ///
    /// The template becomes active. An existing last-fired marker is kept so
    /// that changing the rule cannot fire the template twice on one day; a
    /// marker that is not a valid `YYYY-MM-DD` date is cleared, which makes
    /// this the repair path for a corrupted template row.
    ///
    /// # Errors
    ///
    /// * `CadenceError::ActivityNotFound` - no activity with `id`
    /// * `CadenceError::InvalidInput` - the activity is an instance spawned
    ///   from another template
    pub fn set_recurrence(&mut self, id: u64, recurrence: &Recurrence) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let parent: Option<Option<i64>> = tx
            .query_row(SELECT_PARENT_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to read activity")?;

        match parent {
            None => return Err(CadenceError::ActivityNotFound { id }),
            Some(Some(parent_id)) => {
                return Err(CadenceError::invalid_input("id").with_reason(format!(
                    "Activity {id} was spawned from template {parent_id} and cannot recur itself"
                )))
            }
            Some(None) => {}
        }

        tx.execute(
            SET_RECURRENCE_SQL,
            params![
                recurrence.kind.as_str(),
                recurrence.day,
                recurrence.month,
                Timestamp::now().to_string(),
                id as i64
            ],
        )
        .db_context("Failed to set recurrence")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_activity(id)?
            .ok_or(CadenceError::ActivityNotFound { id })
    }

    /// Pauses or resumes a recurring template.
    ///
    /// # Errors
    ///
    /// * `CadenceError::ActivityNotFound` - no activity with `id`
    /// * `CadenceError::InvalidInput` - the activity is not recurring
    pub fn set_recurrence_active(&mut self, id: u64, active: bool) -> Result<Activity> {
        let updated = self
            .connection
            .execute(
                SET_RECURRENCE_ACTIVE_SQL,
                params![active, Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update recurrence state")?;

        if updated == 0 {
            return match self.get_activity(id)? {
                None => Err(CadenceError::ActivityNotFound { id }),
                Some(_) => Err(CadenceError::invalid_input("id")
                    .with_reason(format!("Activity {id} is not a recurring template"))),
            };
        }

        self.get_activity(id)?
            .ok_or(CadenceError::ActivityNotFound { id })
    }

    /// Root templates that are recurring and active, oldest first.
    ///
    /// Each row is decoded on its own. A row whose columns cannot be decoded
    /// is returned as a [`TemplateFailure`] carrying its ID; only failing to
    /// run the query is an error.
    pub fn list_active_templates(&self) -> Result<Vec<LoadedTemplate>> {
        let query = format!(
            "SELECT {ACTIVITY_COLUMNS} FROM activities \
             WHERE is_recurring = 1 AND recurrence_active = 1 AND parent_activity_id IS NULL \
             ORDER BY id"
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare template query")?;

        let loaded = stmt
            .query_map([], |row| {
                let id = row.get::<_, i64>(0)? as u64;
                Ok(Self::build_activity_from_row(row)
                    .map_err(|e| unreadable_template(id, &e))
                    .and_then(|activity| {
                        RecurringTemplate::try_from(activity).map_err(|activity| {
                            TemplateFailure {
                                template_id: activity.id,
                                message: format!(
                                    "Template {} has no recurrence rule",
                                    activity.id
                                ),
                            }
                        })
                    }))
            })
            .db_context("Failed to query recurring templates")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to query recurring templates")?;

        Ok(loaded)
    }

    /// Records that `template_id` fired on `today` and inserts `instance`, in
    /// one transaction.
    ///
    /// The marker is claimed with a conditional update first; if it already
    /// equals `today` nothing is written and [`FireOutcome::AlreadyFired`] is
    /// returned. A failed insert rolls the marker back.
    pub fn fire_template(
        &mut self,
        template_id: u64,
        instance: &NewInstance,
        today: Date,
    ) -> Result<FireOutcome> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        let today_str = today.to_string();

        let claimed = tx
            .execute(
                CLAIM_FIRING_SQL,
                params![&today_str, &now, template_id as i64],
            )
            .db_context("Failed to update last fired date")?;

        if claimed == 0 {
            return Ok(FireOutcome::AlreadyFired);
        }

        tx.execute(
            INSERT_INSTANCE_SQL,
            params![
                instance.name,
                instance.description,
                instance.department_id.map(|id| id as i64),
                instance.priority.as_str(),
                instance.created_by,
                instance.deadline.to_string(),
                instance.parent_activity_id as i64,
                &now,
                &now
            ],
        )
        .db_context("Failed to insert recurring instance")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(FireOutcome::Created(id))
    }
}

fn unreadable_template(id: u64, err: &rusqlite::Error) -> TemplateFailure {
    TemplateFailure {
        template_id: id,
        message: format!("Failed to read template {id}: {err}"),
    }
}

impl ActivityStore for super::Database {
    fn active_templates(&mut self) -> Result<Vec<LoadedTemplate>> {
        self.list_active_templates()
    }

    fn fire(
        &mut self,
        template: &RecurringTemplate,
        instance: &NewInstance,
        today: Date,
    ) -> Result<FireOutcome> {
        self.fire_template(template.id, instance, today)
    }
}
