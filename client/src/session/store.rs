//! Named, expiring session entries over a cookie medium.
//!
//! Reads, writes and deletes never fail from the caller's side. Medium
//! errors are logged and a failed read reports absence, so every storage
//! fault looks like "logged out".
//!
//! Names and values are percent-encoded on write and decoded on read, so
//! any token (including `;`, `%` or surrounding whitespace) round-trips.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

use super::clock::{Clock, SystemClock};
use super::medium::{CookieMedium, StoreError};

/// Cookie name under which the session token lives.
pub const SESSION_COOKIE_NAME: &str = "auth_token";

/// Lifetime of a freshly written session entry.
pub const DEFAULT_TTL_DAYS: u32 = 1;

/// Key/value capability over expiring string entries.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `name` for `ttl_days`, replacing any prior value.
    fn write(&self, name: &str, value: &str, ttl_days: u32);

    /// Current unexpired value of `name`, if any.
    fn read(&self, name: &str) -> Option<String>;

    /// Expire `name` immediately. Deleting an absent entry is a no-op.
    fn delete(&self, name: &str);
}

impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    fn write(&self, name: &str, value: &str, ttl_days: u32) {
        (**self).write(name, value, ttl_days);
    }

    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }

    fn delete(&self, name: &str) {
        (**self).delete(name);
    }
}

/// [`SessionStore`] that writes site-wide (`Path=/`) cookies through a
/// [`CookieMedium`].
#[derive(Debug)]
pub struct CookieStore<M, C = SystemClock> {
    medium: M,
    clock: C,
}

impl<M: CookieMedium, C: Clock> CookieStore<M, C> {
    #[must_use]
    pub fn new(medium: M, clock: C) -> Self {
        Self { medium, clock }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Like [`SessionStore::read`] but surfaces medium failures.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the medium cannot be read.
    pub fn try_read(&self, name: &str) -> Result<Option<String>, StoreError> {
        let raw = self.medium.cookie_string()?;
        Ok(find_cookie(&raw, name))
    }

    fn apply(&self, op: &str, assignment: &str) {
        if let Err(e) = self.medium.set_cookie(assignment) {
            leptos::logging::warn!("session cookie {op} dropped: {e}");
        }
    }
}

impl<M: CookieMedium, C: Clock> SessionStore for CookieStore<M, C> {
    fn write(&self, name: &str, value: &str, ttl_days: u32) {
        let expires = self.clock.now() + Duration::days(i64::from(ttl_days));
        self.apply("write", &assignment(name, value, expires));
    }

    fn read(&self, name: &str) -> Option<String> {
        match self.try_read(name) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("session cookie read failed, treating as absent: {e}");
                None
            }
        }
    }

    fn delete(&self, name: &str) {
        self.apply("delete", &assignment(name, "", OffsetDateTime::UNIX_EPOCH));
    }
}

/// Format a percent-encoded `name=value; Path=/; Expires=<HTTP date>`
/// assignment.
pub(crate) fn assignment(name: &str, value: &str, expires: OffsetDateTime) -> String {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .expires(expires)
        .build()
        .encoded()
        .to_string()
}

/// Decoded value of the first well-formed pair named exactly `name`.
/// Malformed pairs (including invalid UTF-8 after decoding) are skipped.
pub(crate) fn find_cookie(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
}
