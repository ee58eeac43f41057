// fixtures/mod.rs - Test fixtures module
//
// Reusable test data: product lists as the API returns them and marketplace
// result pages as the scraper receives them. Tests build on these instead of
// repeating literal JSON and HTML.

pub mod pages;
pub mod products;

pub use pages::{search_page_html, Listing};
pub use products::{product, sample_products};
