//! Database operations and SQLite management for activities.
//!
//! Queries are grouped by concern in the submodules, each adding an `impl`
//! block to [`Database`]:
//!
//! - [`activity_queries`]: create, read, list and status changes
//! - [`template_queries`]: recurrence settings and firing templates
//! - [`migrations`]: schema creation and upgrades of older files

use std::path::Path;

use rusqlite::{types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod migrations;
pub mod template_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Error for a column whose stored text or integer cannot be converted.
pub(crate) fn conversion_error(
    column: usize,
    kind: Type,
    err: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, kind, err.into())
}
