//! # streetsaver
//!
//! Leptos + WASM frontend for the StreetSaver group-buying platform.
//! Street food vendors pool bulk orders, pay from a prepaid wallet, and
//! find suppliers nearby; suppliers list products and fulfil pools.
//!
//! This crate contains pages, components, application state, the typed
//! REST client, and the session lifecycle that gates protected routes.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log forwarding and hydrates the
/// server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
