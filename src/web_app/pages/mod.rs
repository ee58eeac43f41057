// web_app/pages/mod.rs - Page components module
//
// - SearchPage: product search with unit price ranking

pub mod search;

// Re-export page components
pub use search::SearchPage;
