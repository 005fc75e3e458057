//! Database error types for fbl-db.

use fbl_core::errors::CoreError;
use thiserror::Error;

/// Errors from CMS database lookups.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The database file does not exist.
    #[error("CMS database not found at '{0}'")]
    Missing(String),

    /// A SQL query failed or returned data of an unexpected shape.
    #[error("Query failed: {0}")]
    Query(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for CoreError {
    fn from(error: DatabaseError) -> Self {
        Self::WatchedContent(error.to_string())
    }
}
