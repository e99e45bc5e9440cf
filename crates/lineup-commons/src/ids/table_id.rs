//! Queue table identifier type
//!
//! Appears in URLs (`/make/{table_id}`, `/delete/{table_id}`) and as the
//! foreign key on queue entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a queue table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(i64);

impl TableId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TableId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TableId> for i64 {
    fn from(id: TableId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_id_creation() {
        let id = TableId::new(3);
        assert_eq!(id.as_i64(), 3);
    }

    #[test]
    fn test_table_id_display() {
        assert_eq!(TableId::new(12).to_string(), "12");
    }
}
