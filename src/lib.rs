//! # kyn-client
//!
//! Leptos + WASM frontend for the Know-Your-Neighborhood community portal.
//! Presents login/registration, discussion forums with comments, a user
//! profile, and static informational pages against a cookie-session HTTP API.
//!
//! This crate contains pages, components, application state, network types,
//! and the session store that mirrors server-side authentication state in
//! the browser. The API server is a separate deployment; all requests ride
//! the browser's ambient session cookie.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/logging hooks and hydrates the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
