//! Queue table and entry persistence
//!
//! Tables are free-text-named queues; entries belong to exactly one
//! table. The only multi-statement write is the cascading delete, which
//! runs inside a single SQLite transaction so orphaned entries cannot
//! survive a partial failure.

use crate::db::Database;
use crate::error::StoreError;
use chrono::Utc;
use lineup_commons::{EntryId, QueueEntry, QueueTable, TableId};
use rusqlite::{params, OptionalExtension, Row};

/// Listing order for queue tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableOrder {
    /// Most recently created first. Ties on the timestamp fall back to
    /// id descending so same-millisecond creations still list the later
    /// insert first.
    NewestFirst,
    /// Insertion (rowid) order.
    Unspecified,
}

/// Queue store.
pub struct QueueStore {
    db: Database,
}

impl QueueStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Create a queue table with the current UTC timestamp.
    ///
    /// `name` must be non-empty; the HTTP layer validates before
    /// calling. Names are not unique, two tables may share one.
    pub fn create_table(&self, name: &str) -> Result<QueueTable, StoreError> {
        let created_at = Utc::now().timestamp_millis();
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO queue_tables (name, created_at) VALUES (?1, ?2)",
                params![name, created_at],
            )?;
            let id = conn.last_insert_rowid();
            log::info!("Created queue table '{}' (id {})", name, id);
            Ok(QueueTable {
                id: TableId::new(id),
                name: name.to_string(),
                created_at,
            })
        })
    }

    /// Full scan of all tables, no pagination.
    pub fn list_tables(&self, order: TableOrder) -> Result<Vec<QueueTable>, StoreError> {
        let sql = match order {
            TableOrder::NewestFirst => {
                "SELECT id, name, created_at FROM queue_tables
                 ORDER BY created_at DESC, id DESC"
            }
            TableOrder::Unspecified => {
                "SELECT id, name, created_at FROM queue_tables ORDER BY id"
            }
        };
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let rows = stmt.query_map([], row_to_table)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
        })
    }

    /// Case-insensitive substring search over table names.
    ///
    /// A blank query yields no results rather than the full listing.
    /// `%`, `_` and `\` in the query are matched literally.
    pub fn search_tables(&self, query: &str) -> Result<Vec<QueueTable>, StoreError> {
        let needle = query.trim();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{}%", escape_like(needle));
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, created_at FROM queue_tables
                 WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id",
            )?;
            let rows = stmt.query_map(params![pattern], row_to_table)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
        })
    }

    /// Fetch one table; [`StoreError::NotFound`] when absent.
    pub fn get_table(&self, id: TableId) -> Result<QueueTable, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT id, name, created_at FROM queue_tables WHERE id = ?1",
                params![id.as_i64()],
                row_to_table,
            )
            .optional()?
            .ok_or(StoreError::NotFound)
        })
    }

    /// Append an entry to a table.
    ///
    /// The table is checked first; appending to a missing table is
    /// [`StoreError::NotFound`], never a silent insert.
    pub fn add_entry(&self, table_id: TableId, name: &str) -> Result<QueueEntry, StoreError> {
        self.db.with_conn(|conn| {
            let exists: Option<i64> = conn
                .query_row(
                    "SELECT id FROM queue_tables WHERE id = ?1",
                    params![table_id.as_i64()],
                    |row| row.get(0),
                )
                .optional()?;
            if exists.is_none() {
                return Err(StoreError::NotFound);
            }
            conn.execute(
                "INSERT INTO queue_entries (table_id, name) VALUES (?1, ?2)",
                params![table_id.as_i64(), name],
            )?;
            let id = conn.last_insert_rowid();
            Ok(QueueEntry {
                id: EntryId::new(id),
                table_id,
                name: name.to_string(),
            })
        })
    }

    /// All entries of a table, insertion order. Missing tables list as
    /// empty.
    pub fn list_entries(&self, table_id: TableId) -> Result<Vec<QueueEntry>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, table_id, name FROM queue_entries
                 WHERE table_id = ?1 ORDER BY id",
            )?;
            let rows = stmt.query_map(params![table_id.as_i64()], row_to_entry)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
        })
    }

    /// Delete a table together with all its entries.
    ///
    /// Runs as one transaction: entries first, then the table row. When
    /// the table row is missing the open transaction is dropped, which
    /// rolls back the entry delete, and NotFound is returned.
    pub fn delete_table(&self, table_id: TableId) -> Result<(), StoreError> {
        self.db.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let removed_entries = tx.execute(
                "DELETE FROM queue_entries WHERE table_id = ?1",
                params![table_id.as_i64()],
            )?;
            let removed_tables = tx.execute(
                "DELETE FROM queue_tables WHERE id = ?1",
                params![table_id.as_i64()],
            )?;
            if removed_tables == 0 {
                return Err(StoreError::NotFound);
            }
            tx.commit()?;
            log::info!(
                "Deleted queue table {} ({} entries)",
                table_id,
                removed_entries
            );
            Ok(())
        })
    }
}

fn row_to_table(row: &Row<'_>) -> rusqlite::Result<QueueTable> {
    Ok(QueueTable {
        id: TableId::new(row.get(0)?),
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<QueueEntry> {
    Ok(QueueEntry {
        id: EntryId::new(row.get(0)?),
        table_id: TableId::new(row.get(1)?),
        name: row.get(2)?,
    })
}

/// Prefix LIKE metacharacters with the escape character so user input
/// matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
