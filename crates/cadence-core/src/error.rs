//! Error types for the cadence library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ActivityStatus;

/// Comprehensive error type for all cadence operations.
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Activity not found for the given ID
    #[error("Activity with ID {id} not found")]
    ActivityNotFound { id: u64 },
    /// The list of recurring templates could not be read, so no sweep can run
    #[error("Failed to fetch recurring templates: {source}")]
    TemplateFetch {
        #[source]
        source: Box<CadenceError>,
    },
    /// Calendar arithmetic left the supported date range
    #[error("Date error: {message}")]
    Date {
        message: String,
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Status change that the activity lifecycle does not allow
    #[error("Activity {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: u64,
        from: ActivityStatus,
        to: ActivityStatus,
    },
    /// A blocking database task panicked or was cancelled
    #[error("Background task failed: {message}")]
    Task { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CadenceError {
        CadenceError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CadenceError {
        CadenceError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CadenceError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a jiff error raised while computing calendar dates.
    pub fn date(message: impl Into<String>, source: jiff::Error) -> Self {
        Self::Date {
            message: message.into(),
            source,
        }
    }

    /// Wraps an error raised while reading the template list.
    pub fn template_fetch(source: CadenceError) -> Self {
        Self::TemplateFetch {
            source: Box::new(source),
        }
    }

    /// Maps a `spawn_blocking` join failure.
    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Task {
            message: e.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::database(message).with_source(e))
    }
}

/// Specialized extension trait for calendar arithmetic Results.
pub trait DateResultExt<T> {
    /// Map jiff errors with a message.
    fn date_context(self, message: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CadenceError::date(message, e))
    }
}

/// Result type alias for cadence operations
pub type Result<T> = std::result::Result<T, CadenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_fetch_keeps_source_message() {
        let inner = CadenceError::database("Failed to query templates")
            .with_source(rusqlite::Error::InvalidQuery);
        let err = CadenceError::template_fetch(inner);
        assert!(err
            .to_string()
            .contains("Failed to fetch recurring templates"));
        assert!(err.to_string().contains("Failed to query templates"));
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = CadenceError::invalid_input("recurrence_day").with_reason("must be 0-6");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'recurrence_day': must be 0-6"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = CadenceError::InvalidTransition {
            id: 7,
            from: ActivityStatus::Completed,
            to: ActivityStatus::InProgress,
        };
        assert_eq!(
            err.to_string(),
            "Activity 7 cannot move from completed to in_progress"
        );
    }
}
