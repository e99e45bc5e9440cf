//! Password hashing and verification
//!
//! bcrypt via the `bcrypt` crate. Hashing is CPU-bound (tens of
//! milliseconds at the default cost), so both operations run on the
//! tokio blocking pool instead of an async worker.

use crate::error::AuthError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Cost factor used for new hashes.
pub const BCRYPT_COST: u32 = DEFAULT_COST;

/// Hash a plaintext password.
///
/// `cost` overrides the default work factor; tests pass a low cost to
/// stay fast, production callers pass `None`.
pub async fn hash_password(password: &str, cost: Option<u32>) -> Result<String, AuthError> {
    let password = password.to_string();
    let cost = cost.unwrap_or(BCRYPT_COST);
    tokio::task::spawn_blocking(move || {
        hash(&password, cost).map_err(|e| AuthError::Hashing(format!("bcrypt error: {e}")))
    })
    .await
    .map_err(|e| AuthError::Hashing(format!("task join error: {e}")))?
}

/// Verify a plaintext password against a stored bcrypt hash.
pub async fn verify_password(password: &str, hashed: &str) -> Result<bool, AuthError> {
    let password = password.to_string();
    let hashed = hashed.to_string();
    tokio::task::spawn_blocking(move || verify_sync(&password, &hashed))
        .await
        .map_err(|e| AuthError::Hashing(format!("task join error: {e}")))?
}

/// Synchronous verification core, shared with [`crate::authenticate`]
/// which already runs on the blocking pool.
pub(crate) fn verify_sync(password: &str, hashed: &str) -> Result<bool, AuthError> {
    verify(password, hashed).map_err(|e| AuthError::Hashing(format!("bcrypt error: {e}")))
}
