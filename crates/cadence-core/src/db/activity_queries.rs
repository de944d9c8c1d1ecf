//! Activity CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use log::warn;
use rusqlite::{params, types::Type, OptionalExtension};

use super::conversion_error;
use crate::{
    error::{CadenceError, DatabaseResultExt, Result},
    models::{Activity, ActivityFilter, ActivityStatus, Priority, Recurrence, RecurrenceType},
    params::ValidatedActivity,
};

/// Column list shared by every query that builds an [`Activity`].
pub(crate) const ACTIVITY_COLUMNS: &str = "id, name, description, department_id, priority, status, created_by, deadline, parent_activity_id, is_recurring, recurrence_type, recurrence_day, recurrence_month, recurrence_active, last_fired_date, created_at, updated_at";

const INSERT_ACTIVITY_SQL: &str = "INSERT INTO activities (name, description, department_id, priority, status, created_by, deadline, is_recurring, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9)";
const SELECT_STATUS_SQL: &str = "SELECT status FROM activities WHERE id = ?1";
const UPDATE_STATUS_SQL: &str = "UPDATE activities SET status = ?1, updated_at = ?2 WHERE id = ?3";

impl super::Database {
    /// Helper function to construct an Activity from a database row laid out
    /// as [`ACTIVITY_COLUMNS`].
    pub(crate) fn build_activity_from_row(row: &rusqlite::Row) -> rusqlite::Result<Activity> {
        let priority_str: String = row.get(4)?;
        let priority = priority_str
            .parse::<Priority>()
            .map_err(|e| conversion_error(4, Type::Text, e))?;

        let status_str: String = row.get(5)?;
        let status = status_str
            .parse::<ActivityStatus>()
            .map_err(|e| conversion_error(5, Type::Text, e))?;

        let is_recurring: bool = row.get(9)?;
        let recurrence = if is_recurring {
            let kind: Option<String> = row.get(10)?;
            Some(Recurrence {
                kind: RecurrenceType::from_stored(kind.as_deref().unwrap_or_default()),
                day: small_int(row, 11)?,
                month: small_int(row, 12)?,
                active: row.get(13)?,
                last_fired_date: date_column(row, 14)?,
            })
        } else {
            None
        };

        Ok(Activity {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            department_id: row.get::<_, Option<i64>>(3)?.map(|id| id as u64),
            priority,
            status,
            created_by: row.get(6)?,
            deadline: date_column(row, 7)?,
            parent_activity_id: row.get::<_, Option<i64>>(8)?.map(|id| id as u64),
            recurrence,
            created_at: timestamp_column(row, 15)?,
            updated_at: timestamp_column(row, 16)?,
        })
    }

    /// Creates a one-off activity in pending status.
    pub fn create_activity(&mut self, activity: &ValidatedActivity) -> Result<Activity> {
        let now = Timestamp::now().to_string();
        let deadline = activity.deadline.map(|d| d.to_string());

        self.connection
            .execute(
                INSERT_ACTIVITY_SQL,
                params![
                    activity.name,
                    activity.description,
                    activity.department_id.map(|id| id as i64),
                    activity.priority.as_str(),
                    ActivityStatus::Pending.as_str(),
                    activity.created_by,
                    deadline,
                    &now,
                    &now
                ],
            )
            .db_context("Failed to insert activity")?;

        let id = self.connection.last_insert_rowid() as u64;
        self.get_activity(id)?
            .ok_or(CadenceError::ActivityNotFound { id })
    }

    /// Retrieves an activity by its ID.
    pub fn get_activity(&self, id: u64) -> Result<Option<Activity>> {
        self.connection
            .query_row(
                &format!("SELECT {ACTIVITY_COLUMNS} FROM activities WHERE id = ?1"),
                params![id as i64],
                Self::build_activity_from_row,
            )
            .optional()
            .db_context("Failed to get activity")
    }

    /// Lists activities with optional filtering, soonest deadline first.
    /// Activities without a deadline come last.
    ///
    /// Rows that cannot be decoded are logged with their ID and left out, so
    /// one corrupted row does not hide every other activity.
    pub fn list_activities(&self, filter: Option<&ActivityFilter>) -> Result<Vec<Activity>> {
        let mut query = format!("SELECT {ACTIVITY_COLUMNS} FROM activities");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str()));
            }

            if let Some(department_id) = f.department_id {
                conditions.push("department_id = ?");
                params_vec.push(Box::new(department_id as i64));
            }

            if let Some(priority) = f.priority {
                conditions.push("priority = ?");
                params_vec.push(Box::new(priority.as_str()));
            }

            if f.templates_only {
                conditions.push("is_recurring = 1 AND parent_activity_id IS NULL");
            }

            if let Some(parent_id) = f.parent_activity_id {
                conditions.push("parent_activity_id = ?");
                params_vec.push(Box::new(parent_id as i64));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY deadline IS NULL, deadline, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt
            .query_map(&params_refs[..], |row| {
                let id: i64 = row.get(0)?;
                Ok((id, Self::build_activity_from_row(row)))
            })
            .db_context("Failed to query activities")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to query activities")?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, decoded)| match decoded {
                Ok(activity) => Some(activity),
                Err(e) => {
                    warn!("Skipping unreadable activity {id}: {e}");
                    None
                }
            })
            .collect())
    }

    /// Moves an activity to `status`, enforcing the lifecycle rules of
    /// [`ActivityStatus::can_transition_to`].
    pub fn update_status(&mut self, id: u64, status: ActivityStatus) -> Result<Activity> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current: Option<String> = tx
            .query_row(SELECT_STATUS_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to read activity status")?;
        let Some(current) = current else {
            return Err(CadenceError::ActivityNotFound { id });
        };
        let current = current.parse::<ActivityStatus>().map_err(|e| {
            CadenceError::database("Stored activity status is invalid")
                .with_source(conversion_error(0, Type::Text, e))
        })?;

        if !current.can_transition_to(status) {
            return Err(CadenceError::InvalidTransition {
                id,
                from: current,
                to: status,
            });
        }

        if current != status {
            tx.execute(
                UPDATE_STATUS_SQL,
                params![status.as_str(), Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update activity status")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_activity(id)?
            .ok_or(CadenceError::ActivityNotFound { id })
    }
}

fn small_int(row: &rusqlite::Row, column: usize) -> rusqlite::Result<Option<i8>> {
    row.get::<_, Option<i64>>(column)?
        .map(|v| i8::try_from(v).map_err(|e| conversion_error(column, Type::Integer, e)))
        .transpose()
}

fn date_column(row: &rusqlite::Row, column: usize) -> rusqlite::Result<Option<Date>> {
    row.get::<_, Option<String>>(column)?
        .map(|s| {
            s.parse::<Date>()
                .map_err(|e| conversion_error(column, Type::Text, e))
        })
        .transpose()
}

fn timestamp_column(row: &rusqlite::Row, column: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(column)?
        .parse::<Timestamp>()
        .map_err(|e| conversion_error(column, Type::Text, e))
}
