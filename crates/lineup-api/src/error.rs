//! API error handling
//!
//! [`ApiError`] maps store and auth failures onto HTML responses.
//! Handlers intercept the cases with dedicated UX (duplicate identity
//! on the register form, bad credentials on the login form) before
//! they reach this mapping; what arrives here renders as an error
//! page. Internal detail goes to the log, never into the page.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use lineup_auth::AuthError;
use lineup_store::StoreError;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store failure. `NotFound` renders as 404, the rest as 500.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Auth failure other than a credential mismatch (those re-render
    /// the login form instead of erroring).
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Server-side wiring fault: missing app data, failed blocking
    /// task.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {self}");
        }
        let message = match status {
            StatusCode::NOT_FOUND => "That page or queue table does not exist.",
            StatusCode::UNAUTHORIZED => "Invalid username or password.",
            _ => "Something went wrong on our side. Please try again.",
        };
        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(crate::views::error_page(status, message))
    }
}

/// Run a synchronous store call on the blocking thread pool.
///
/// `rusqlite` must not run on async workers; this is the single seam
/// where handlers cross onto the blocking pool.
pub async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::internal(format!("blocking task join error: {e}")))?
        .map_err(ApiError::from)
}
