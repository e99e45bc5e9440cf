// Cookie handling for the HttpOnly session cookie
//
// The session token travels only in this cookie; it is never exposed to
// page scripts or embedded in URLs.

use actix_web::cookie::{Cookie, SameSite};
use std::time::Duration;

/// Cookie name for the session token
pub const SESSION_COOKIE_NAME: &str = "lineup_session";

/// Configuration for the session cookie
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Whether to set the Secure flag (should be true in production/HTTPS)
    pub secure: bool,
    /// Cookie path (default: "/")
    pub path: String,
    /// SameSite policy
    pub same_site: SameSite,
    /// Domain (None = current domain)
    pub domain: Option<String>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            // SECURITY: Default to true for HTTPS-only cookie transmission.
            // Set to false only in development environments without TLS.
            secure: true,
            path: "/".to_string(),
            same_site: SameSite::Lax,
            domain: None,
        }
    }
}

/// Create the HttpOnly session cookie carrying `token`.
///
/// The cookie max-age mirrors the server-side session TTL, so the
/// browser forgets the token around the time the binding expires.
pub fn session_cookie<'a>(token: &str, ttl: Duration, config: &CookieConfig) -> Cookie<'a> {
    let max_age = cookie::time::Duration::seconds(ttl.as_secs().min(i64::MAX as u64) as i64);

    let mut cookie = Cookie::build(SESSION_COOKIE_NAME, token.to_string())
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .max_age(max_age)
        .finish();

    if let Some(ref domain) = config.domain {
        cookie.set_domain(domain.clone());
    }

    cookie
}

/// Create a cookie that clears the session cookie.
///
/// Used during logout to remove the token from the browser.
pub fn clear_session_cookie<'a>(config: &CookieConfig) -> Cookie<'a> {
    let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .expires(cookie::time::OffsetDateTime::UNIX_EPOCH)
        .finish();

    if let Some(ref domain) = config.domain {
        cookie.set_domain(domain.clone());
    }

    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let config = CookieConfig::default();
        let cookie = session_cookie("token-123", Duration::from_secs(3600), &config);

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "token-123");
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(cookie::time::Duration::seconds(3600)));
    }

    #[test]
    fn test_clear_cookie_expires_in_the_past() {
        let config = CookieConfig::default();
        let cookie = clear_session_cookie(&config);

        assert_eq!(cookie.name(), SESSION_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert!(cookie.http_only().unwrap_or(false));
        let expires = cookie.expires_datetime().unwrap();
        assert!(expires < cookie::time::OffsetDateTime::now_utc());
    }

    #[test]
    fn test_domain_is_applied_when_configured() {
        let config = CookieConfig {
            domain: Some("queues.example.com".to_string()),
            ..Default::default()
        };
        let cookie = session_cookie("t", Duration::from_secs(60), &config);
        assert_eq!(cookie.domain(), Some("queues.example.com"));
    }
}
