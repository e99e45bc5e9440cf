//! Store error taxonomy
//!
//! Persistence failures the HTTP layer can act on. UNIQUE violations
//! become [`StoreError::Duplicate`] with the colliding column name so
//! the register form can say which field is taken; everything else
//! SQLite reports stays wrapped in [`StoreError::Database`].

use thiserror::Error;

/// Errors from the account and queue stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The addressed row does not exist. Maps to HTTP 404.
    #[error("record not found")]
    NotFound,

    /// A UNIQUE constraint rejected the write.
    #[error("duplicate value for {field}")]
    Duplicate { field: String },

    /// Any other SQLite failure. Maps to HTTP 500.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    /// Create a Duplicate error for the given field.
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }

    /// True for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Classify a rusqlite error, turning UNIQUE violations into
    /// [`StoreError::Duplicate`].
    ///
    /// SQLite reports these as constraint failures with a message of
    /// the form `UNIQUE constraint failed: users.username`; the column
    /// name after the dot becomes the duplicate field.
    pub(crate) fn from_sqlite(err: rusqlite::Error) -> Self {
        let duplicate_field = match &err {
            rusqlite::Error::SqliteFailure(cause, Some(message))
                if cause.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                message
                    .strip_prefix("UNIQUE constraint failed: ")
                    .map(|column| column.rsplit('.').next().unwrap_or(column).to_string())
            }
            _ => None,
        };
        match duplicate_field {
            Some(field) => Self::Duplicate { field },
            None => Self::Database(err),
        }
    }
}
