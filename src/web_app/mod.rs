// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types and display state (client and server)
// - controller.rs: Search submission lifecycle, target independent
// - api/: Search endpoint, scraper and price parsing (server only)
// - client.rs: gloo-based HTTP client and ticker (hydrate only)
// - view.rs, components/, pages/, app.rs: Leptos UI (SSR and hydrate)

pub mod model;

pub mod controller;

#[cfg(feature = "scrape-tools")]
pub mod api;

#[cfg(feature = "hydrate")]
pub mod client;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod view;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
