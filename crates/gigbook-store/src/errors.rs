//! Error handling for gigbook-store
//!
//! Wraps gigbook-core ExError with store-specific helpers

use gigbook_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, err: rusqlite::Error) -> ExError {
    let cause = from_rusqlite(err);
    ExError::new(cause.kind())
        .with_op("migration")
        .with_entity_id(migration_id)
        .with_message(format!("Migration {} failed: {}", migration_id, cause.message()))
        .with_source(cause)
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a connection failure for a store that could not be opened
pub fn connection_failure(location: &Path, err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::ConnectionFailure)
        .with_op("open")
        .with_message(format!("Cannot open {}: {}", location.display(), err))
}

/// Create a database error from rusqlite::Error
///
/// Constraint failures and "already exists" schema errors are classified so
/// callers can tell them apart from generic storage failures. SQLite reports
/// the latter while preparing the statement, so they arrive as
/// `SqlInputError` rather than `SqliteFailure`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, msg) => classify(e.code, msg.as_deref()),
        rusqlite::Error::SqlInputError { error, msg, .. } => {
            classify(error.code, Some(msg.as_str()))
        }
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

fn classify(code: ErrorCode, msg: Option<&str>) -> ExErrorKind {
    match code {
        ErrorCode::ConstraintViolation => ExErrorKind::ConstraintViolation,
        ErrorCode::CannotOpen => ExErrorKind::ConnectionFailure,
        _ if msg.is_some_and(|m| m.contains("already exists")) => ExErrorKind::SchemaConflict,
        _ => ExErrorKind::Persistence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: std::os::raw::c_int, msg: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), Some(msg.to_string()))
    }

    #[test]
    fn test_constraint_failure_classified() {
        let err = from_rusqlite(sqlite_failure(
            rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL,
            "NOT NULL constraint failed: bands.name",
        ));
        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert!(err.message().contains("bands.name"));
    }

    #[test]
    fn test_existing_table_classified_as_schema_conflict() {
        let err = from_rusqlite(sqlite_failure(
            rusqlite::ffi::SQLITE_ERROR,
            "table bands already exists",
        ));
        assert_eq!(err.kind(), ExErrorKind::SchemaConflict);
    }

    #[test]
    fn test_rejected_create_statement_is_schema_conflict() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE venues (id INTEGER)", []).unwrap();

        let raw = conn
            .execute("CREATE TABLE venues (id INTEGER)", [])
            .unwrap_err();
        assert!(matches!(raw, rusqlite::Error::SqlInputError { .. }));

        let err = from_rusqlite(raw);
        assert_eq!(err.kind(), ExErrorKind::SchemaConflict);
        assert!(err.message().contains("venues already exists"));
    }

    #[test]
    fn test_migration_error_keeps_cause() {
        let err = migration_error(
            "001_initial_schema",
            sqlite_failure(rusqlite::ffi::SQLITE_ERROR, "table bands already exists"),
        );
        assert_eq!(err.kind(), ExErrorKind::SchemaConflict);
        assert_eq!(err.op(), Some("migration"));
        assert_eq!(err.entity_id(), Some("001_initial_schema"));
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().starts_with("[ERR_SCHEMA_CONFLICT] in operation 'sqlite'"));
    }

    #[test]
    fn test_cannot_open_classified() {
        let err = from_rusqlite(sqlite_failure(
            rusqlite::ffi::SQLITE_CANTOPEN,
            "unable to open database file",
        ));
        assert_eq!(err.kind(), ExErrorKind::ConnectionFailure);
    }

    #[test]
    fn test_other_errors_are_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }
}
