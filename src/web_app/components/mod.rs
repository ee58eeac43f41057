// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Loading spinner and inline error
// - search.rs: Search form
// - status.rs: Status panel and progress bar
// - product.rs: Ranked result list

pub mod common;
pub mod product;
pub mod search;
pub mod status;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
pub use search::*;
pub use status::*;
