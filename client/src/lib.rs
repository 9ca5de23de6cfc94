//! # fieldbook-client
//!
//! Leptos + WASM frontend for the Fieldbook booking app.
//!
//! The session core lives in the `fieldbook` crate; this crate adds the
//! browser transport and token storage, the session context, route wiring
//! with role guards, and the auth pages.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
