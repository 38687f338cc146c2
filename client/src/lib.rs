//! Call-tracking admin dashboard (Leptos).
//!
//! ARCHITECTURE
//! ============
//! `state` holds context-provided signals, `net` talks to the REST backend,
//! `components` and `pages` render, and `util` wraps browser APIs. Domain
//! rules come from the `calls` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
