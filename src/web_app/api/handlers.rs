// web_app/api/handlers.rs - HTTP handlers for the search API
//
// GET /api/search?query=<term>&pages=<n>
// - 200: JSON array of products that have both prices
// - 400: missing query
// - 502: the marketplace could not be scraped

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use super::marketplace::ProductSource;
use crate::web_app::model::{ErrorBody, Product, MAX_PAGES};

pub const MISSING_QUERY_ERROR: &str = "Missing 'query' parameter";

/// Raw query string; `pages` stays a string so bad values can be recovered
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub pages: Option<String>,
}

/// Page count to scrape: absent means `max`, numbers are clamped to
/// `1..=max`, anything else means a single page.
pub fn resolve_page_count(raw: Option<&str>, max: u32) -> u32 {
    let raw = match raw.map(str::trim) {
        None | Some("") => return max,
        Some(raw) => raw,
    };
    match raw.parse::<i64>() {
        Ok(pages) => pages.clamp(1, i64::from(max)) as u32,
        Err(_) => 1,
    }
}

/// Search handler, generic over the product source so tests can swap it
pub async fn search_api<S: ProductSource + 'static>(
    source: web::Data<S>,
    params: web::Query<SearchQuery>,
) -> HttpResponse {
    let term = params.query.as_deref().unwrap_or_default().trim();
    if term.is_empty() {
        tracing::warn!("Search request without query");
        return HttpResponse::BadRequest().json(ErrorBody::new(MISSING_QUERY_ERROR));
    }

    let pages = resolve_page_count(params.pages.as_deref(), MAX_PAGES);
    tracing::info!("Search request: query='{}', pages={}", term, pages);

    match source.search(term, pages).await {
        Ok(products) => {
            let found = products.len();
            let valid: Vec<Product> = products
                .into_iter()
                .filter(Product::has_usable_prices)
                .collect();
            tracing::info!("Returning {} of {} scraped products", valid.len(), found);
            HttpResponse::Ok().json(valid)
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            HttpResponse::BadGateway().json(ErrorBody::new(e.to_string()))
        }
    }
}
