use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error taxonomy for catalog storage faults
///
/// Only unrecoverable storage-layer conditions live here. Expected
/// business-rule failures (duplicate keys, missing rows, illegal state
/// transitions) are surfaced as boolean or empty results by the store and
/// never enter this taxonomy. Each variant maps to a stable error code for
/// programmatic handling.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// SQLite reported a fault while executing a statement
    #[error("Storage error in '{op}': {message}")]
    Persistence { op: String, message: String },

    /// A schema migration failed to apply
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// Filesystem-level failure (database directory, file access)
    #[error("I/O error in '{operation}': {message}")]
    Io { operation: String, message: String },

    /// JSON encoding/decoding failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl CatalogError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::Persistence { .. } => "ERR_PERSISTENCE",
            CatalogError::Migration { .. } => "ERR_MIGRATION",
            CatalogError::Io { .. } => "ERR_IO",
            CatalogError::Serialization { .. } => "ERR_SERIALIZATION",
        }
    }
}

/// Conversion from serde_json::Error to CatalogError
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let cases = [
            (
                CatalogError::Persistence {
                    op: "insert".into(),
                    message: "disk I/O error".into(),
                },
                "ERR_PERSISTENCE",
            ),
            (
                CatalogError::Migration {
                    migration_id: "001".into(),
                    reason: "syntax error".into(),
                },
                "ERR_MIGRATION",
            ),
            (
                CatalogError::Io {
                    operation: "create_dir".into(),
                    message: "permission denied".into(),
                },
                "ERR_IO",
            ),
            (
                CatalogError::Serialization {
                    message: "bad json".into(),
                },
                "ERR_SERIALIZATION",
            ),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_display_includes_operation() {
        let err = CatalogError::Persistence {
            op: "borrow_book".into(),
            message: "database is locked".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("borrow_book"));
        assert!(rendered.contains("database is locked"));
    }
}
