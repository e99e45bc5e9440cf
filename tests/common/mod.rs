//! Shared harness for the HTTP integration tests.
//!
//! Builds the same application state `lineup_server::lifecycle` wires
//! in production, backed by a private in-memory database per test.
//! Tests assemble the Actix app themselves and drive it through
//! `actix_web::test`.

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use lineup_auth::{CookieConfig, SessionStore, SESSION_COOKIE_NAME};
use lineup_store::{Database, QueueStore, UserStore};
use std::sync::Arc;
use std::time::Duration;

/// Application state for one test, mirroring `ApplicationComponents`.
pub struct TestServer {
    pub user_store: Arc<UserStore>,
    pub queue_store: Arc<QueueStore>,
    pub session_store: Arc<SessionStore>,
    pub cookie_config: CookieConfig,
}

impl TestServer {
    pub fn new() -> Self {
        let db = Database::open_in_memory().expect("open in-memory database");
        TestServer {
            user_store: Arc::new(UserStore::new(db.clone())),
            queue_store: Arc::new(QueueStore::new(db)),
            session_store: Arc::new(SessionStore::new(Duration::from_secs(24 * 3600))),
            cookie_config: CookieConfig {
                secure: false,
                ..CookieConfig::default()
            },
        }
    }
}

/// Request cookie carrying `token`, as a browser would send it back.
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE_NAME, token.to_string())
}

/// Value of the session cookie set on `resp`, if any.
pub fn session_cookie_value<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// The Location header of a redirect, or "" when absent.
pub fn location<B>(resp: &ServiceResponse<B>) -> &str {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

pub mod auth_helper {
    use super::TestServer;
    use lineup_auth::hash_password;
    use lineup_commons::{NewUser, User};

    /// Create an account directly in the store. Low bcrypt cost keeps
    /// the tests fast; HTTP registration uses the production cost.
    pub async fn create_test_user(server: &TestServer, username: &str, password: &str) -> User {
        let password_hash = hash_password(password, Some(4)).await.expect("hash password");
        server
            .user_store
            .create_user(NewUser {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                password_hash,
            })
            .expect("create test user")
    }

    /// Establish a session for `user` and return its cookie token.
    pub fn login_session(server: &TestServer, user: &User) -> String {
        server.session_store.create(user.id).token
    }
}
