//! Registration, login, logout and the dashboard hop

use actix_web::{get, http::header, post, web, HttpResponse};
use lineup_auth::{
    authenticate, clear_session_cookie, hash_password, session_cookie, AuthError, CookieConfig,
    SessionStore,
};
use lineup_commons::NewUser;
use lineup_store::{StoreError, UserStore};
use std::sync::Arc;

use super::see_other;
use crate::error::{run_blocking, ApiError};
use crate::extract::RequireLogin;
use crate::forms::{LoginForm, RegisterForm};
use crate::views::{self, LoginView, RegisterView};

/// Shown for any credential failure. One message whether the username
/// is unknown or the password wrong.
const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password.";

/// GET /register
///
/// Renders the empty registration form.
#[get("/register")]
pub async fn register_form() -> HttpResponse {
    let view = RegisterView {
        error: None,
        username: "",
        email: "",
    };
    views::html(view.render())
}

/// POST /register
///
/// Creates the account, then sends the browser to the login page.
/// Blank fields and duplicate username/email re-render the form with a
/// message; identity fields are kept, the password is not.
#[post("/register")]
pub async fn register(
    form: web::Form<RegisterForm>,
    users: web::Data<Arc<UserStore>>,
) -> Result<HttpResponse, ApiError> {
    let username = form.username.trim().to_string();
    let email = form.email.trim().to_string();

    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        let view = RegisterView {
            error: Some("Username, email and password are all required."),
            username: &username,
            email: &email,
        };
        return Ok(views::html(view.render()));
    }

    let password_hash = hash_password(&form.password, None).await?;
    let store = users.get_ref().clone();
    let new_user = NewUser {
        username: username.clone(),
        email: email.clone(),
        password_hash,
    };
    match run_blocking(move || store.create_user(new_user)).await {
        Ok(_) => Ok(see_other("/login")),
        Err(ApiError::Store(StoreError::Duplicate { field })) => {
            let message = format!("That {field} is already taken.");
            let view = RegisterView {
                error: Some(&message),
                username: &username,
                email: &email,
            };
            Ok(views::html(view.render()))
        }
        Err(other) => Err(other),
    }
}

/// GET /login
///
/// Renders the login form.
#[get("/login")]
pub async fn login_form() -> HttpResponse {
    let view = LoginView {
        error: None,
        username: "",
    };
    views::html(view.render())
}

/// POST /login
///
/// Verifies credentials, establishes the session and redirects to the
/// dashboard. Every failure path re-renders the form with the same
/// generic message so responses cannot reveal whether a username
/// exists.
#[post("/login")]
pub async fn login(
    form: web::Form<LoginForm>,
    users: web::Data<Arc<UserStore>>,
    sessions: web::Data<Arc<SessionStore>>,
    cookies: web::Data<CookieConfig>,
) -> Result<HttpResponse, ApiError> {
    let username = form.username.trim().to_string();

    if username.is_empty() || form.password.is_empty() {
        let view = LoginView {
            error: Some(LOGIN_FAILED_MESSAGE),
            username: &username,
        };
        return Ok(views::html(view.render()));
    }

    match authenticate(users.get_ref().clone(), &username, &form.password).await {
        Ok(user) => {
            let session = sessions.create(user.id);
            let cookie = session_cookie(&session.token, sessions.ttl(), cookies.get_ref());
            log::info!("User '{}' logged in", user.username);
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/dashboard"))
                .cookie(cookie)
                .finish())
        }
        Err(AuthError::InvalidCredentials) => {
            let view = LoginView {
                error: Some(LOGIN_FAILED_MESSAGE),
                username: &username,
            };
            Ok(views::html(view.render()))
        }
        Err(other) => Err(other.into()),
    }
}

/// GET /logout
///
/// Revokes the session and clears the cookie.
#[get("/logout")]
pub async fn logout(
    auth: RequireLogin,
    sessions: web::Data<Arc<SessionStore>>,
    cookies: web::Data<CookieConfig>,
) -> HttpResponse {
    sessions.revoke(&auth.token);
    log::info!("User '{}' logged out", auth.user.username);
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login"))
        .cookie(clear_session_cookie(cookies.get_ref()))
        .finish()
}

/// GET /dashboard
///
/// Post-login landing hop; the listing is the real destination.
#[get("/dashboard")]
pub async fn dashboard(_auth: RequireLogin) -> HttpResponse {
    see_other("/")
}
