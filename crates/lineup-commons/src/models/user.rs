//! User account model
//!
//! Accounts are created on registration and never mutated or deleted
//! afterwards. The password is stored only as a bcrypt hash; plaintext
//! never reaches the store.

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user account.
///
/// `is_admin` is persisted but no authorization check consults it yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    /// Globally unique login name, stored exactly as registered.
    pub username: String,
    /// Globally unique contact address.
    pub email: String,
    /// bcrypt hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    /// Unix milliseconds at registration.
    pub created_at: i64,
}

impl User {
    /// Registration instant as a UTC datetime, if the stored millis are
    /// representable.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }
}

/// Payload for creating a user account.
///
/// The caller hashes the password before constructing this.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_at_utc_conversion() {
        let user = User {
            id: UserId::new(1),
            username: "amira".to_string(),
            email: "amira@example.com".to_string(),
            password_hash: "$2b$04$hash".to_string(),
            is_admin: false,
            created_at: 1_700_000_000_000,
        };
        let utc = user.created_at_utc().unwrap();
        assert_eq!(utc.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: UserId::new(2),
            username: "noor".to_string(),
            email: "noor@example.com".to_string(),
            password_hash: "$2b$04$secret".to_string(),
            is_admin: true,
            created_at: 0,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("noor"));
    }
}
