//! Credential verification
//!
//! One entry point: look the user up by username, check the password
//! against the stored hash. Both failure modes collapse into
//! [`AuthError::InvalidCredentials`] so neither the error nor the
//! rendered response can reveal whether the username exists.

use crate::error::AuthError;
use crate::password::verify_sync;
use lineup_commons::User;
use lineup_store::UserStore;
use std::sync::Arc;

/// Verify a username/password pair against the account store.
///
/// Runs the lookup and the bcrypt check as one unit on the blocking
/// pool; the store is synchronous and bcrypt is CPU-bound.
pub async fn authenticate(
    users: Arc<UserStore>,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let username = username.to_string();
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        let Some(user) = users.get_user_by_username(&username)? else {
            log::debug!("Login attempt for unknown username");
            return Err(AuthError::InvalidCredentials);
        };
        if verify_sync(&password, &user.password_hash)? {
            Ok(user)
        } else {
            log::debug!("Login attempt with wrong password for user {}", user.id);
            Err(AuthError::InvalidCredentials)
        }
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("task join error: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;
    use lineup_commons::NewUser;
    use lineup_store::Database;

    async fn store_with_user(username: &str, password: &str) -> Arc<UserStore> {
        let store = Arc::new(UserStore::new(Database::open_in_memory().unwrap()));
        let password_hash = hash_password(password, Some(4)).await.unwrap();
        store
            .create_user(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash,
            })
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_valid_credentials_return_the_user() {
        let users = store_with_user("amira", "hunter2").await;
        let user = authenticate(users, "amira", "hunter2").await.unwrap();
        assert_eq!(user.username, "amira");
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let users = store_with_user("amira", "hunter2").await;
        let err = authenticate(users, "amira", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_is_indistinguishable_from_wrong_password() {
        let users = store_with_user("amira", "hunter2").await;
        let unknown = authenticate(users.clone(), "ghost", "hunter2")
            .await
            .unwrap_err();
        let wrong = authenticate(users, "amira", "wrong").await.unwrap_err();
        assert_eq!(unknown.to_string(), wrong.to_string());
    }
}
