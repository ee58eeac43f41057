// lib.rs - Root module for the unit_price_search library
//
// The same crate builds the server (feature `ssr`), the WASM bundle hydrated
// in the browser (feature `hydrate`) and the scraping CLI (`scrape-tools`).

/// Sample products and marketplace pages shared by the test suites
pub mod fixtures;

pub mod web_app;

/// WASM entry point called by the cargo-leptos generated loader
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // tracing events are forwarded to `log` when no subscriber is installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(web_app::App);
}
