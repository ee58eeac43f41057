// web_app/model/results.rs - What the results area shows
//
// Products are ranked by price per kilogram (cheapest first) and turned into
// display entries with French-style prices ("3,50").

use std::cmp::Ordering;

use super::Product;

pub const NO_RESULTS_TEXT: &str = "No relevant results found.";
pub const WAITING_TEXT: &str = "Please wait, results are being retrieved...";

/// Formats a price with two decimals and a comma separator.
///
/// Halves of a cent round away from zero ("0,125" shows as "0,13"), where
/// plain `{:.2}` would round exact ties to even.
pub fn format_price(value: f64) -> String {
    let cents = (value * 100.0).round();
    format!("{:.2}", cents / 100.0).replace('.', ",")
}

/// Orders by unit price ascending. Stable, so equal unit prices keep the
/// order the server sent them in. Non-finite prices go last.
pub fn rank_by_unit_price(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by(|a, b| compare_unit_price(a.unit_price_kg, b.unit_price_kg));
    products
}

fn compare_unit_price(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.total_cmp(&b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// One rendered row of the results list
#[derive(Clone, Debug, PartialEq)]
pub struct ProductEntry {
    pub title: String,
    pub link: String,
    pub unit_price_kg: f64,
    /// Formatted price per kilogram, without unit
    pub unit_price: String,
    /// Formatted total price, without currency
    pub total_price: String,
}

impl From<Product> for ProductEntry {
    fn from(product: Product) -> Self {
        ProductEntry {
            unit_price: format_price(product.unit_price_kg),
            total_price: format_price(product.total_price),
            unit_price_kg: product.unit_price_kg,
            title: product.title,
            link: product.link,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsView {
    /// Nothing searched yet
    #[default]
    Idle,
    /// A search is in flight
    Waiting,
    Empty,
    Listed(Vec<ProductEntry>),
    Failed(String),
}

impl ResultsView {
    /// Replaces whatever was shown with the ranked products
    pub fn from_products(products: Vec<Product>) -> Self {
        if products.is_empty() {
            return ResultsView::Empty;
        }
        let entries = rank_by_unit_price(products)
            .into_iter()
            .map(ProductEntry::from)
            .collect();
        ResultsView::Listed(entries)
    }

    /// Inline error shown in place of the results
    pub fn failed(message: impl std::fmt::Display) -> Self {
        ResultsView::Failed(format!("Search failed: {message}"))
    }

    pub fn entries(&self) -> &[ProductEntry] {
        match self {
            ResultsView::Listed(entries) => entries,
            _ => &[],
        }
    }

    /// Placeholder text for the non-list states
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ResultsView::Idle | ResultsView::Listed(_) => None,
            ResultsView::Waiting => Some(WAITING_TEXT),
            ResultsView::Empty => Some(NO_RESULTS_TEXT),
            ResultsView::Failed(message) => Some(message),
        }
    }
}
