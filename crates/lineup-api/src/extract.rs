//! Request extractors for authentication state.
//!
//! Two `FromRequest` implementations let handlers receive their viewer
//! as a parameter:
//!
//! - [`CurrentUser`] for pages that merely adapt to login state;
//!   anonymous requests extract successfully as `None`.
//! - [`RequireLogin`] for gated routes; anonymous requests are
//!   answered with 303 See Other to `/login` before the handler runs.
//!
//! # Setup
//!
//! Both need `Arc<SessionStore>` and `Arc<UserStore>` registered as
//! app data:
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::new(session_store.clone()))
//!     .app_data(web::Data::new(user_store.clone()))
//!     .service(my_handler)
//! ```

use actix_web::{
    dev::Payload,
    http::{header, StatusCode},
    web, FromRequest, HttpRequest, HttpResponse, ResponseError,
};
use lineup_auth::{SessionStore, SESSION_COOKIE_NAME};
use lineup_commons::User;
use lineup_store::UserStore;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{run_blocking, ApiError};

/// Error type for the login-gated extractor.
///
/// `LoginRequired` is deliberately not an error page: gated routes
/// answer anonymous requests with a redirect to the login form.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("login required")]
    LoginRequired,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ResponseError for GuardError {
    fn status_code(&self) -> StatusCode {
        match self {
            GuardError::LoginRequired => StatusCode::SEE_OTHER,
            GuardError::Api(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            GuardError::LoginRequired => HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/login"))
                .finish(),
            GuardError::Api(e) => e.error_response(),
        }
    }
}

/// Optional viewer identity.
///
/// Resolves cookie -> session binding -> user row. Pages behind this
/// extractor render for everyone and only vary their navigation.
pub struct CurrentUser(Option<User>);

impl CurrentUser {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<User> {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let viewer = resolve_viewer(&req).await?;
            Ok(CurrentUser(viewer.map(|(user, _token)| user)))
        })
    }
}

/// Login gate for mutating and dashboard-like routes.
///
/// Handlers behind it always see an authenticated user; the extractor
/// short-circuits anonymous requests with the `/login` redirect.
pub struct RequireLogin {
    pub user: User,
    /// Token backing this request; logout revokes it.
    pub token: String,
}

impl FromRequest for RequireLogin {
    type Error = GuardError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            match resolve_viewer(&req).await? {
                Some((user, token)) => Ok(RequireLogin { user, token }),
                None => Err(GuardError::LoginRequired),
            }
        })
    }
}

/// Shared resolution: session cookie -> registry -> user row.
///
/// A token whose user row has vanished is revoked on the spot and
/// treated as anonymous.
async fn resolve_viewer(req: &HttpRequest) -> Result<Option<(User, String)>, ApiError> {
    let sessions: Arc<SessionStore> = match req.app_data::<web::Data<Arc<SessionStore>>>() {
        Some(sessions) => sessions.get_ref().clone(),
        None => {
            return Err(ApiError::internal(
                "SessionStore not configured. Ensure Arc<SessionStore> is registered as app data.",
            ))
        }
    };
    let users: Arc<UserStore> = match req.app_data::<web::Data<Arc<UserStore>>>() {
        Some(users) => users.get_ref().clone(),
        None => {
            return Err(ApiError::internal(
                "UserStore not configured. Ensure Arc<UserStore> is registered as app data.",
            ))
        }
    };

    let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) else {
        return Ok(None);
    };
    let token = cookie.value().to_string();
    let Some(user_id) = sessions.resolve(&token) else {
        return Ok(None);
    };

    let user = run_blocking(move || users.get_user_by_id(user_id)).await?;
    match user {
        Some(user) => Ok(Some((user, token))),
        None => {
            log::warn!("Session bound to missing user {user_id}; revoking");
            sessions.revoke(&token);
            Ok(None)
        }
    }
}
