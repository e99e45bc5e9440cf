//! Authentication error taxonomy

use lineup_store::StoreError;
use thiserror::Error;

/// Errors from credential and password handling.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. One variant on purpose:
    /// responses must not reveal which part failed.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// bcrypt failure or a failed blocking task.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// The account store failed during a credential lookup.
    #[error(transparent)]
    Store(#[from] StoreError),
}
