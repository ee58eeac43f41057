// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel over the wire between the search API and the page.
// The display-side state machines live in the submodules:
// - progress.rs: simulated progress value and bar styling
// - status.rs: loading panel state
// - results.rs: ranked, formatted result entries

use serde::{Deserialize, Serialize};

pub mod progress;
pub mod results;
pub mod status;

pub use progress::{Progress, ProgressStyle};
pub use results::{format_price, rank_by_unit_price, ProductEntry, ResultsView};
pub use status::StatusState;

/// Path of the search endpoint served by the backend
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Page count the search page always asks for
pub const SEARCH_PAGES: u32 = 5;

/// Upper bound the API clamps the `pages` parameter to
pub const MAX_PAGES: u32 = 50;

/// One scraped product as returned by `GET /api/search`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub link: String,
    pub total_price: f64,
    /// Price per kilogram, the ranking key
    pub unit_price_kg: f64,
    /// Unit price text exactly as it appeared on the listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price_raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

impl Product {
    /// A product is worth showing only when both prices were found
    pub fn has_usable_prices(&self) -> bool {
        self.total_price > 0.0 && self.unit_price_kg > 0.0
    }
}

/// Error payload of a failed API call
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}
