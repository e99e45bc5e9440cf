//! Schema migrations
//!
//! Idempotent DDL applied on every open. `foreign_keys` is a
//! per-connection pragma; setting it here covers the single long-lived
//! connection the stores share.

use crate::error::StoreError;
use rusqlite::Connection;

pub(crate) fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

         CREATE TABLE IF NOT EXISTS users (
             id            INTEGER PRIMARY KEY AUTOINCREMENT,
             username      TEXT NOT NULL UNIQUE,
             email         TEXT NOT NULL UNIQUE,
             password_hash TEXT NOT NULL,
             is_admin      INTEGER NOT NULL DEFAULT 0,
             created_at    INTEGER NOT NULL
         );

         CREATE TABLE IF NOT EXISTS queue_tables (
             id         INTEGER PRIMARY KEY AUTOINCREMENT,
             name       TEXT NOT NULL,
             created_at INTEGER NOT NULL
         );

         CREATE TABLE IF NOT EXISTS queue_entries (
             id       INTEGER PRIMARY KEY AUTOINCREMENT,
             table_id INTEGER NOT NULL REFERENCES queue_tables(id),
             name     TEXT NOT NULL
         );

         CREATE INDEX IF NOT EXISTS idx_queue_entries_table_id
             ON queue_entries(table_id);",
    )?;
    log::debug!("Schema migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_entry_insert_requires_existing_table() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let result = conn.execute(
            "INSERT INTO queue_entries (table_id, name) VALUES (999, 'orphan')",
            [],
        );
        assert!(result.is_err());
    }
}
