//! User identifier type
//!
//! Assigned by the account store on registration (SQLite
//! autoincrement); referenced by session bindings and request
//! extractors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Create a user ID from a raw row id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the ID as an i64 for SQL parameters.
    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_creation() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new(7);
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::from(99i64);
        let raw: i64 = id.into();
        assert_eq!(raw, 99);
    }

    #[test]
    fn test_user_id_equality() {
        assert_eq!(UserId::new(1), UserId::new(1));
        assert_ne!(UserId::new(1), UserId::new(2));
    }
}
