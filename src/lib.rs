//! # staffboard
//!
//! Leptos + WASM frontend for an HR management dashboard: sign-in and
//! registration, employee records, team rosters, and summary metrics
//! over a REST backend.
//!
//! The structural core is the session/authorization model: token
//! lifecycle (`net::session_client`), claim decoding (`util::claims`),
//! durable credential storage (`util::storage`), and role-based route
//! gating (`util::guard`). Pages and components are thin rendering over
//! that state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: wire up logging and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
