//! Authentication for Lineup.
//!
//! Four concerns, kept deliberately separate:
//! - [`password`] — bcrypt hashing and verification on the blocking
//!   thread pool.
//! - [`credentials`] — username/password authentication against the
//!   account store, with a single indistinguishable failure mode.
//! - [`session`] — the server-side token registry binding opaque
//!   cookie tokens to user ids with a TTL.
//! - [`helpers::cookie`] — building and clearing the `lineup_session`
//!   HTTP cookie.

pub mod credentials;
pub mod error;
pub mod helpers;
pub mod password;
pub mod session;

pub use credentials::authenticate;
pub use error::AuthError;
pub use helpers::cookie::{
    clear_session_cookie, session_cookie, CookieConfig, SESSION_COOKIE_NAME,
};
pub use password::{hash_password, verify_password};
pub use session::{Session, SessionStore};
