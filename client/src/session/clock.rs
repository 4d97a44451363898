//! Wall-clock source used to stamp and expire cookies.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::sync::{Arc, Mutex, PoisonError};

use time::{Duration, OffsetDateTime};

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Real time: JS `Date.now()` in the browser, the OS clock elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        #[cfg(feature = "hydrate")]
        {
            // `OffsetDateTime::now_utc` panics on wasm32-unknown-unknown.
            #[allow(clippy::cast_possible_truncation)]
            let nanos = (js_sys::Date::now() as i128) * 1_000_000;
            OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            OffsetDateTime::now_utc()
        }
    }
}

/// Manually driven clock. Clones share the same instant.
#[derive(Clone, Debug)]
pub struct FixedClock {
    at: Arc<Mutex<OffsetDateTime>>,
}

impl FixedClock {
    #[must_use]
    pub fn new(at: OffsetDateTime) -> Self {
        Self { at: Arc::new(Mutex::new(at)) }
    }

    pub fn set(&self, at: OffsetDateTime) {
        *self.at.lock().unwrap_or_else(PoisonError::into_inner) = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut at = self.at.lock().unwrap_or_else(PoisonError::into_inner);
        *at += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.at.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
