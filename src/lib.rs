//! # searchifi-client
//!
//! Leptos + WASM frontend for the Searchifi collaborative project platform.
//! Replaces the React `client/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, typed network
//! payloads, the REST client, and the per-project realtime channel client.
//! All backend logic (auth, persistence, fan-out, AI generation) lives in an
//! external service reached over HTTP and a socket channel.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook, wire up console logging, and
/// hydrate the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
