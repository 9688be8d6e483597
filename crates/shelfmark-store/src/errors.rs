//! Error handling for shelfmark-store
//!
//! Wraps shelfmark-core CatalogError with store-specific helpers

use shelfmark_core::errors::CatalogError;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> CatalogError {
    CatalogError::Persistence {
        op: op.to_string(),
        message: err.to_string(),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> CatalogError {
    CatalogError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> CatalogError {
    CatalogError::Io {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}

/// Whether a rusqlite error is a uniqueness/constraint violation
///
/// Duplicate primary keys on insert are an expected business outcome, not a
/// storage fault; callers translate them into a `false` result.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_detection() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (id TEXT PRIMARY KEY)", [])
            .unwrap();
        conn.execute("INSERT INTO t (id) VALUES ('a')", []).unwrap();

        let err = conn
            .execute("INSERT INTO t (id) VALUES ('a')", [])
            .unwrap_err();
        assert!(is_constraint_violation(&err));
    }

    #[test]
    fn test_from_rusqlite_carries_operation() {
        let err = from_rusqlite("add_book", rusqlite::Error::InvalidQuery);
        assert_eq!(err.code(), "ERR_PERSISTENCE");
        assert!(err.to_string().contains("add_book"));
    }
}
