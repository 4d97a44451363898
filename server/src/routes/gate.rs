//! Server-side route gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! A full page load of a protected path reaches the server before any WASM
//! runs. This middleware applies the client crate's `RouteGate` to the
//! request's cookies so an anonymous visitor is redirected before SSR
//! renders the protected view. Cookies are read through the same
//! `RequestCookies` medium the SSR render uses, so both agree on what
//! counts as a session.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use gatehouse_client::session::{AuthService, CookieStore, GateDecision, RequestCookies, RouteGate, SystemClock};

use crate::config::ServerConfig;

/// Gate decision for a request to `path` carrying `headers`.
pub(crate) fn decide(headers: &HeaderMap, path: &str) -> GateDecision {
    let auth = AuthService::new(CookieStore::new(RequestCookies::from_headers(headers), SystemClock));
    RouteGate::default().evaluate_path(path, &auth)
}

/// Middleware: pass allowed requests through, redirect the rest.
pub async fn require_session(State(config): State<Arc<ServerConfig>>, request: Request, next: Next) -> Response {
    if !config.session_gate {
        return next.run(request).await;
    }

    let path = request.uri().path().to_owned();
    match decide(request.headers(), &path) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::RedirectTo(target) => {
            tracing::debug!(%path, %target, "no session; redirecting");
            Redirect::temporary(target).into_response()
        }
    }
}
