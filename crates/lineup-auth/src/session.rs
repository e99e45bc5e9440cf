//! Server-side session registry
//!
//! Opaque UUID v4 tokens bound to user ids in a concurrent map, each
//! binding carrying a fixed expiry deadline stamped at login. The
//! registry is process-local; a restart signs everyone out.

use dashmap::DashMap;
use lineup_commons::UserId;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// An established session, as handed to the login handler.
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token carried by the session cookie.
    pub token: String,
    pub user_id: UserId,
}

struct SessionEntry {
    user_id: UserId,
    expires_at: Instant,
}

/// Token -> user bindings with a TTL.
///
/// Expired bindings are dropped on touch by [`resolve`](Self::resolve)
/// and in bulk by the periodic [`purge_expired`](Self::purge_expired)
/// sweep.
pub struct SessionStore {
    sessions: DashMap<String, SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Session lifetime; the cookie max-age mirrors it.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Bind a fresh unguessable token to `user_id`.
    pub fn create(&self, user_id: UserId) -> Session {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                user_id,
                expires_at: Instant::now() + self.ttl,
            },
        );
        log::debug!("Session created for user {}", user_id);
        Session { token, user_id }
    }

    /// Resolve a token to the bound user, if the binding exists and has
    /// not expired.
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        let entry = self.sessions.get(token)?;
        if entry.expires_at <= Instant::now() {
            // Release the shard guard before removing the key.
            drop(entry);
            self.sessions.remove(token);
            return None;
        }
        Some(entry.user_id)
    }

    /// Clear a binding (logout). Unknown tokens are a no-op.
    pub fn revoke(&self, token: &str) {
        if self.sessions.remove(token).is_some() {
            log::debug!("Session revoked");
        }
    }

    /// Sweep every expired binding; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.sessions.len())
    }

    /// Number of live bindings (expired-but-unswept included).
    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}
