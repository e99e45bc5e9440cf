//! SQLite connection handling
//!
//! One connection shared by all stores, guarded by a `parking_lot`
//! mutex. Operations serialize per lock acquisition, which gives
//! ordinary transactional semantics without any custom locking and is
//! plenty for this workload.

use crate::error::StoreError;
use crate::migrations;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Shared handle to the Lineup database.
///
/// Cloning is cheap; clones refer to the same connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) the database file at `path` and apply schema
    /// migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::initialize(conn)
    }

    /// Open a private in-memory database. Used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, StoreError> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with the connection locked.
    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Run `f` with the connection locked mutably. Needed for
    /// `Connection::transaction`.
    pub(crate) fn with_conn_mut<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = self.conn.lock();
        f(&mut conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_in_memory_applies_schema() {
        let db = Database::open_in_memory().unwrap();
        let count = db
            .with_conn(|conn| {
                let n: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
                     AND name IN ('users', 'queue_tables', 'queue_entries')",
                    [],
                    |row| row.get(0),
                )?;
                Ok(n)
            })
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_clones_share_the_connection() {
        let db = Database::open_in_memory().unwrap();
        let clone = db.clone();
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO queue_tables (name, created_at) VALUES ('shared', 0)",
                [],
            )?;
            Ok(())
        })
        .unwrap();
        let seen = clone
            .with_conn(|conn| {
                let n: i64 =
                    conn.query_row("SELECT COUNT(*) FROM queue_tables", [], |row| row.get(0))?;
                Ok(n)
            })
            .unwrap();
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_open_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lineup.db");
        {
            let db = Database::open(&path).unwrap();
            db.with_conn(|conn| {
                conn.execute(
                    "INSERT INTO queue_tables (name, created_at) VALUES ('durable', 0)",
                    [],
                )?;
                Ok(())
            })
            .unwrap();
        }
        let db = Database::open(&path).unwrap();
        let seen = db
            .with_conn(|conn| {
                let n: i64 =
                    conn.query_row("SELECT COUNT(*) FROM queue_tables", [], |row| row.get(0))?;
                Ok(n)
            })
            .unwrap();
        assert_eq!(seen, 1);
    }
}
