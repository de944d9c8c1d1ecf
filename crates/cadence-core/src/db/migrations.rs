//! Database schema initialization and migrations.

use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

/// Index backing the sweep's template query; created after migrations since it
/// covers migrated columns.
const TEMPLATE_INDEX_SQL: &str = "CREATE INDEX IF NOT EXISTS idx_activities_templates \
     ON activities(is_recurring, recurrence_active) WHERE parent_activity_id IS NULL";

/// Columns added after the first release, with their definitions.
const ADDED_COLUMNS: &[(&str, &str)] = &[
    ("recurrence_active", "INTEGER NOT NULL DEFAULT 0"),
    ("last_fired_date", "TEXT"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Add columns missing from databases created by older versions.
    fn apply_migrations(&self) -> Result<()> {
        for (column, definition) in ADDED_COLUMNS {
            let exists: bool = self
                .connection
                .query_row(
                    "SELECT COUNT(*) FROM pragma_table_info('activities') WHERE name = ?1",
                    params![column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context("Failed to inspect activities table")?;

            if !exists {
                self.connection
                    .execute(
                        &format!("ALTER TABLE activities ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .db_context(&format!("Failed to add {column} column to activities table"))?;

                // Templates from before pausing existed were all live.
                if *column == "recurrence_active" {
                    self.connection
                        .execute(
                            "UPDATE activities SET recurrence_active = 1 WHERE is_recurring = 1",
                            [],
                        )
                        .db_context("Failed to backfill recurrence_active")?;
                }
            }
        }

        self.connection
            .execute(TEMPLATE_INDEX_SQL, [])
            .db_context("Failed to create template index")?;

        Ok(())
    }
}
