// web_app/api/mod.rs - Server-side search logic
//
// - config.rs: scraper settings from the environment
// - pricing.rs: price text parsing and €/kg normalisation
// - marketplace.rs: HTTP scraper behind the ProductSource trait
// - handlers.rs: actix-web handler for GET /api/search (ssr only)

pub mod config;
pub mod marketplace;
pub mod pricing;

#[cfg(feature = "ssr")]
pub mod handlers;
