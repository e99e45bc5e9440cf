//! User account persistence
//!
//! Backed by the `users` table. Usernames and emails carry UNIQUE
//! constraints; violations surface as [`StoreError::Duplicate`] naming
//! the colliding field rather than as raw database faults.

use crate::db::Database;
use crate::error::StoreError;
use chrono::Utc;
use lineup_commons::{NewUser, User, UserId};
use rusqlite::{params, OptionalExtension, Row};

/// Account store.
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new account and return the stored row.
    ///
    /// The password in `NewUser` is already hashed; plaintext never
    /// reaches this layer. Fails with `Duplicate { field }` when the
    /// username or email is already registered.
    pub fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let created_at = Utc::now().timestamp_millis();
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (username, email, password_hash, is_admin, created_at)
                 VALUES (?1, ?2, ?3, 0, ?4)",
                params![
                    new_user.username,
                    new_user.email,
                    new_user.password_hash,
                    created_at
                ],
            )
            .map_err(StoreError::from_sqlite)?;
            let id = conn.last_insert_rowid();
            log::info!("Created user '{}' (id {})", new_user.username, id);
            Ok(User {
                id: UserId::new(id),
                username: new_user.username,
                email: new_user.email,
                password_hash: new_user.password_hash,
                is_admin: false,
                created_at,
            })
        })
    }

    /// Exact lookup by username (stored as registered, no folding).
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.db.with_conn(|conn| {
            let user = conn
                .query_row(
                    "SELECT id, username, email, password_hash, is_admin, created_at
                     FROM users WHERE username = ?1",
                    params![username],
                    row_to_user,
                )
                .optional()?;
            Ok(user)
        })
    }

    /// Lookup by id; used when resolving sessions back to users.
    pub fn get_user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.db.with_conn(|conn| {
            let user = conn
                .query_row(
                    "SELECT id, username, email, password_hash, is_admin, created_at
                     FROM users WHERE id = ?1",
                    params![id.as_i64()],
                    row_to_user,
                )
                .optional()?;
            Ok(user)
        })
    }
}

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: UserId::new(row.get(0)?),
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        is_admin: row.get::<_, i64>(4)? != 0,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> UserStore {
        UserStore::new(Database::open_in_memory().unwrap())
    }

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$2b$04$testhash".to_string(),
        }
    }

    #[test]
    fn test_create_and_fetch_by_username() {
        let store = store();
        let created = store.create_user(new_user("amira", "amira@example.com")).unwrap();
        assert!(created.id.as_i64() > 0);
        assert!(!created.is_admin);

        let fetched = store.get_user_by_username("amira").unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_fetch_by_id() {
        let store = store();
        let created = store.create_user(new_user("noor", "noor@example.com")).unwrap();
        let fetched = store.get_user_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched.username, "noor");
    }

    #[test]
    fn test_unknown_lookups_return_none() {
        let store = store();
        assert!(store.get_user_by_username("ghost").unwrap().is_none());
        assert!(store.get_user_by_id(UserId::new(404)).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_names_the_field() {
        let store = store();
        store.create_user(new_user("sam", "sam@example.com")).unwrap();
        let err = store
            .create_user(new_user("sam", "other@example.com"))
            .unwrap_err();
        match err {
            StoreError::Duplicate { field } => assert_eq!(field, "username"),
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_email_names_the_field() {
        let store = store();
        store.create_user(new_user("sam", "sam@example.com")).unwrap();
        let err = store
            .create_user(new_user("samir", "sam@example.com"))
            .unwrap_err();
        match err {
            StoreError::Duplicate { field } => assert_eq!(field, "email"),
            other => panic!("expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_username_lookup_is_exact() {
        let store = store();
        store.create_user(new_user("Amira", "amira@example.com")).unwrap();
        assert!(store.get_user_by_username("amira").unwrap().is_none());
    }
}
