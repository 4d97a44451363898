//! Server configuration.
//!
//! DESIGN
//! ======
//! Values come from process environment (optionally seeded from `.env`).
//! Parsing goes through a lookup closure so tests can feed a fixed map
//! instead of mutating shared process state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen address, from `HOST` and `PORT`.
    pub addr: SocketAddr,
    /// Gate protected paths on the server before SSR (`SESSION_GATE`).
    /// When off, only the client-side router gate applies.
    pub session_gate: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ServerError::Config(format!("invalid HOST {host:?}")))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ServerError::Config(format!("invalid PORT {raw:?}")))?,
            None => DEFAULT_PORT,
        };

        let session_gate = match lookup("SESSION_GATE") {
            Some(raw) => {
                parse_bool(&raw).ok_or_else(|| ServerError::Config(format!("invalid SESSION_GATE {raw:?}")))?
            }
            None => true,
        };

        Ok(Self { addr: SocketAddr::new(ip, port), session_gate })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
