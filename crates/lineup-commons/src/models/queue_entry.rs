//! Queue entry model

use crate::ids::{EntryId, TableId};
use serde::{Deserialize, Serialize};

/// A single item in a queue table.
///
/// Entries are append-only: never edited or removed individually, only
/// dropped en masse when their table is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: EntryId,
    /// Table this entry belongs to.
    pub table_id: TableId,
    pub name: String,
}
