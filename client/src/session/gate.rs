//! Route gate for protected views.
//!
//! DESIGN
//! ======
//! The gate only decides. Acting on the decision (rendering the view or
//! navigating to the login route) belongs to whoever asked: the client
//! router or the server middleware. Each evaluation is one synchronous,
//! non-cancelable check against the current session state.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::service::AuthService;
use super::store::SessionStore;

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

const PROTECTED_ROUTES: &[&str] = &[DASHBOARD_ROUTE];

/// Outcome of a gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    RedirectTo(&'static str),
}

impl GateDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Gate lifecycle for a single navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Evaluating,
    Allowed,
    Redirected { to: &'static str },
}

impl GateState {
    /// Settle an `Evaluating` gate. Settled states are terminal.
    #[must_use]
    pub fn resolve(self, authenticated: bool, login_route: &'static str) -> Self {
        match self {
            Self::Evaluating if authenticated => Self::Allowed,
            Self::Evaluating => Self::Redirected { to: login_route },
            settled => settled,
        }
    }

    #[must_use]
    pub fn decision(self) -> Option<GateDecision> {
        match self {
            Self::Evaluating => None,
            Self::Allowed => Some(GateDecision::Allow),
            Self::Redirected { to } => Some(GateDecision::RedirectTo(to)),
        }
    }
}

/// Whether `path` requires a session. Trailing slashes are ignored.
#[must_use]
pub fn is_protected(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    PROTECTED_ROUTES.iter().any(|route| *route == trimmed)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGate {
    login_route: &'static str,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self { login_route: LOGIN_ROUTE }
    }
}

impl RouteGate {
    #[must_use]
    pub fn new(login_route: &'static str) -> Self {
        Self { login_route }
    }

    #[must_use]
    pub fn login_route(self) -> &'static str {
        self.login_route
    }

    /// Decide a navigation into a protected view.
    pub fn evaluate<S: SessionStore>(self, auth: &AuthService<S>) -> GateDecision {
        GateState::Evaluating
            .resolve(auth.is_authenticated(), self.login_route)
            .decision()
            .unwrap_or(GateDecision::RedirectTo(self.login_route))
    }

    /// Decide a navigation to `path`; unprotected paths always pass.
    pub fn evaluate_path<S: SessionStore>(self, path: &str, auth: &AuthService<S>) -> GateDecision {
        if is_protected(path) {
            self.evaluate(auth)
        } else {
            GateDecision::Allow
        }
    }
}
