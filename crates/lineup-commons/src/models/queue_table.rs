//! Queue table model

use crate::ids::TableId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named queue owning zero or more entries.
///
/// Entries cannot outlive their table: deleting the table removes them
/// in the same transaction. No owner field exists; any signed-in user
/// may delete any table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueTable {
    pub id: TableId,
    /// Free-text display name, non-empty.
    pub name: String,
    /// Unix milliseconds at creation; drives the newest-first listing.
    pub created_at: i64,
}

impl QueueTable {
    /// Creation instant as a UTC datetime, if the stored millis are
    /// representable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_utc_round_trip() {
        let table = QueueTable {
            id: TableId::new(1),
            name: "Front desk".to_string(),
            created_at: 1_700_000_123_456,
        };
        assert_eq!(
            table.created_at_utc().unwrap().timestamp_millis(),
            1_700_000_123_456
        );
    }
}
