//! # gatehouse-client
//!
//! Leptos + WASM frontend: signup, login and a dashboard that only renders
//! while a session cookie is present.
//!
//! The `session` module holds the cookie-backed session store, the presence
//! query service and the route gate. The server crate reuses the same gate
//! for requests that arrive before the app hydrates.

pub mod app;
pub mod pages;
pub mod session;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
