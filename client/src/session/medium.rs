//! Cookie storage media.
//!
//! DESIGN
//! ======
//! Every medium speaks the browser's `document.cookie` contract: reading
//! yields one `name=value; name=value` string of live entries, and writing
//! applies a single `Set-Cookie`-style assignment with its own expiry and
//! path attributes. An assignment whose expiry has already passed removes
//! the entry.
//!
//! All media are shared, ambient state from the caller's point of view: a
//! read may be stale relative to a write made by another tab or request.

#[cfg(test)]
#[path = "medium_test.rs"]
mod medium_test;

use std::sync::{Mutex, MutexGuard};

use cookie::Cookie;
use http::HeaderMap;
use http::header::COOKIE;
use time::OffsetDateTime;

use super::clock::Clock;

/// Failure modes of a cookie medium. Callers above the store never see
/// these; they degrade to "no session".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("cookie storage unavailable: {0}")]
    Unavailable(String),
    #[error("malformed cookie entry: {0}")]
    MalformedEntry(String),
}

/// Storage port: an expiring string key/value surface scoped to one origin.
pub trait CookieMedium: Send + Sync {
    /// Current live entries as `name=value` pairs joined by `"; "`.
    fn cookie_string(&self) -> Result<String, StoreError>;

    /// Apply one assignment such as `name=value; Path=/; Expires=...`.
    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError>;
}

// =============================================================================
// DOCUMENT COOKIES
// =============================================================================

/// `document.cookie` of the current page. Only functional in the hydrated
/// browser build; every other build reports the medium as unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, StoreError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| StoreError::Unavailable("no html document".to_owned()))
}

impl CookieMedium for DocumentCookies {
    fn cookie_string(&self) -> Result<String, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .cookie()
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StoreError::Unavailable("document cookies require a browser".to_owned()))
        }
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            html_document()?
                .set_cookie(assignment)
                .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = assignment;
            Err(StoreError::Unavailable("document cookies require a browser".to_owned()))
        }
    }
}

// =============================================================================
// REQUEST COOKIES
// =============================================================================

/// Read-only snapshot of the `Cookie` header(s) of an incoming request.
#[derive(Clone, Debug, Default)]
pub struct RequestCookies {
    header: String,
}

impl RequestCookies {
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self { header: header.into() }
    }

    /// Join every `Cookie` header value. Non-UTF-8 values are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let header = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        Self { header }
    }
}

impl CookieMedium for RequestCookies {
    fn cookie_string(&self) -> Result<String, StoreError> {
        Ok(self.header.clone())
    }

    fn set_cookie(&self, _assignment: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("request cookies are read-only".to_owned()))
    }
}

// =============================================================================
// MEMORY COOKIES
// =============================================================================

#[derive(Clone, Debug)]
struct MemoryEntry {
    name: String,
    value: String,
    expires: Option<OffsetDateTime>,
}

/// In-process cookie jar that honors expiry against its clock.
///
/// Entries keep their first insertion position when overwritten, matching
/// how browsers order `document.cookie`.
#[derive(Debug)]
pub struct MemoryCookies<C> {
    clock: C,
    entries: Mutex<Vec<MemoryEntry>>,
}

impl<C: Clock> MemoryCookies<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self { clock, entries: Mutex::new(Vec::new()) }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<MemoryEntry>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("memory cookie jar poisoned".to_owned()))
    }
}

impl<C: Clock> CookieMedium for MemoryCookies<C> {
    fn cookie_string(&self) -> Result<String, StoreError> {
        let now = self.clock.now();
        let entries = self.lock()?;
        Ok(entries
            .iter()
            .filter(|e| e.expires.is_none_or(|at| at > now))
            .map(|e| format!("{}={}", e.name, e.value))
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn set_cookie(&self, assignment: &str) -> Result<(), StoreError> {
        let parsed = Cookie::parse(assignment.to_owned())
            .map_err(|e| StoreError::MalformedEntry(format!("{assignment:?}: {e}")))?;
        let now = self.clock.now();
        let expires = parsed
            .expires_datetime()
            .or_else(|| parsed.max_age().map(|age| now + age));
        let expired = expires.is_some_and(|at| at <= now);

        let mut entries = self.lock()?;
        let existing = entries.iter().position(|e| e.name == parsed.name());
        match (existing, expired) {
            (Some(index), true) => {
                entries.remove(index);
            }
            (Some(index), false) => {
                entries[index].value = parsed.value().to_owned();
                entries[index].expires = expires;
            }
            (None, false) => entries.push(MemoryEntry {
                name: parsed.name().to_owned(),
                value: parsed.value().to_owned(),
                expires,
            }),
            (None, true) => {}
        }
        Ok(())
    }
}
