//! Session presence queries.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use super::store::{DEFAULT_TTL_DAYS, SESSION_COOKIE_NAME, SessionStore};

/// Answers "is a session present" without exposing the raw token.
#[derive(Clone, Debug)]
pub struct AuthService<S> {
    store: S,
}

impl<S: SessionStore> AuthService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff the session cookie holds a non-empty value.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .read(SESSION_COOKIE_NAME)
            .is_some_and(|token| !token.is_empty())
    }

    /// Record `token` as the current session for [`DEFAULT_TTL_DAYS`].
    pub fn login(&self, token: &str) {
        self.store.write(SESSION_COOKIE_NAME, token, DEFAULT_TTL_DAYS);
    }

    /// Drop the current session, if any.
    pub fn logout(&self) {
        self.store.delete(SESSION_COOKIE_NAME);
    }
}
