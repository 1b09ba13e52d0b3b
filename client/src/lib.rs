//! # remindme-client
//!
//! Leptos + WASM front end for Ocassia: contacts, important dates,
//! wishlists, and friend-based gift recommendations.
//!
//! The session-aware route decision lives in `routing`, page views in
//! `pages`, and the geolocation state machine in `state::geolocation` with
//! its driver in `util::geolocation`. Browser bindings are gated behind the
//! `csr` feature so the logic builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: mounts the app into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
