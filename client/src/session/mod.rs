//! Cookie-backed session presence.
//!
//! ARCHITECTURE
//! ============
//! Three layers, each built on the one below:
//!
//! - `medium` adapts a concrete cookie surface (the browser document, an
//!   incoming request header, or an in-memory jar) to one storage port.
//! - `store` reads, writes and expires a single named entry over that port.
//! - `service` answers "is a session present" and `gate` turns that answer
//!   into an allow/redirect decision for protected routes.
//!
//! TRADE-OFFS
//! ==========
//! The session token is never verified. Any non-empty cookie value passes
//! the gate, including one a user sets by hand. Storage failures always
//! degrade to "logged out" instead of surfacing as errors.

pub mod clock;
pub mod gate;
pub mod medium;
pub mod service;
pub mod store;

use std::sync::Arc;

pub use clock::{Clock, FixedClock, SystemClock};
pub use gate::{DASHBOARD_ROUTE, GateDecision, GateState, LOGIN_ROUTE, RouteGate, SIGNUP_ROUTE, is_protected};
pub use medium::{CookieMedium, DocumentCookies, MemoryCookies, RequestCookies, StoreError};
pub use service::AuthService;
pub use store::{CookieStore, DEFAULT_TTL_DAYS, SESSION_COOKIE_NAME, SessionStore};

/// Auth service type shared through Leptos context.
pub type SharedAuth = AuthService<Arc<dyn SessionStore>>;
