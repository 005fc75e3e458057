//! # fbl-db
//!
//! libSQL lookups against the host CMS database.
//!
//! The CMS owns the `flagging` and `node_field_data` tables. This crate only
//! reads them: which nodes a reviewer watches, and the titles of those nodes.
//! The database is a local file (a replica or export of the CMS database) and
//! is never migrated from here.

pub mod error;
pub mod helpers;
pub mod watched;

#[cfg(test)]
mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Read-only handle on the CMS database.
pub struct CmsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl CmsDb {
    /// Open a local database file. `":memory:"` opens an empty in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Missing` when the file does not exist (libSQL
    /// would otherwise create an empty one), or `DatabaseError::LibSql` if it
    /// cannot be opened.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:" && !Path::new(path).exists() {
            return Err(DatabaseError::Missing(path.to_string()));
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        tracing::debug!(path, "opened CMS database");
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
