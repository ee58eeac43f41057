// web_app/api/marketplace.rs - Marketplace search scraper
//
// Fetches search result pages over HTTP and extracts products with CSS
// selectors. Parsing is synchronous and never held across an await point
// (`scraper::Html` is not Send).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use super::config::ScraperConfig;
use super::pricing::{clean_total_price, extract_unit_price};
use crate::web_app::model::Product;

/// Titles longer than this are cut and suffixed with "..."
pub const MAX_TITLE_LENGTH: usize = 50;

/// Result slots per search page, used to keep product ids unique across pages
pub const RESULTS_PER_PAGE: usize = 60;

/// Link used when a listing has no product page link
pub const MISSING_LINK: &str = "#";

/// Raw unit price text when none was found
pub const MISSING_UNIT_PRICE: &str = "N/A";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

static PRODUCT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"div[data-component-type="s-search-result"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h2 span"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static TOTAL_PRICE: LazyLock<Selector> = LazyLock::new(|| selector(".a-price .a-offscreen"));
static UNIT_PRICE_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector("span.a-size-base.a-color-secondary"));

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// Anything that can answer a product search
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn search(&self, term: &str, pages: u32) -> Result<Vec<Product>, ScrapeError>;
}

/// Products found on one result page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedPage {
    /// Result blocks present, including ones without a usable title
    pub blocks: usize,
    pub products: Vec<Product>,
}

pub struct MarketplaceScraper {
    client: reqwest::Client,
    config: ScraperConfig,
}

impl MarketplaceScraper {
    pub fn new(config: ScraperConfig) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Search URL of a result page, pages counted from 1
    pub fn search_url(&self, term: &str, page: u32) -> String {
        let mut url = format!("{}/s?k={}", self.config.base_url, urlencoding::encode(term));
        if page > 1 {
            url.push_str(&format!("&page={}", page));
        }
        url
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "fr-FR,fr;q=0.9")
            .send()
            .await
            .map_err(|source| ScrapeError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScrapeError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ProductSource for MarketplaceScraper {
    async fn search(&self, term: &str, pages: u32) -> Result<Vec<Product>, ScrapeError> {
        tracing::info!("Starting scrape for '{}' over {} pages", term, pages);
        let mut products = Vec::new();

        for page in 1..=pages {
            let url = self.search_url(term, page);
            tracing::info!("Scraping page {}: {}", page, url);

            let html = match self.fetch_page(&url).await {
                Ok(html) => html,
                Err(e) if page == 1 => {
                    tracing::error!("Scrape of '{}' failed: {}", term, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("Stopping pagination at page {}: {}", page, e);
                    break;
                }
            };

            let parsed = parse_search_page(&html, page, &self.config.base_url);
            if parsed.blocks == 0 {
                tracing::info!("No product blocks on page {}, ending pagination", page);
                break;
            }
            tracing::debug!(
                "Page {}: {} blocks, {} products",
                page,
                parsed.blocks,
                parsed.products.len()
            );
            products.extend(parsed.products);
        }

        tracing::info!("Scraping completed: {} results", products.len());
        Ok(products)
    }
}

/// Extracts every product of a search result page
pub fn parse_search_page(html: &str, page: u32, base_url: &str) -> ParsedPage {
    let document = Html::parse_document(html);
    let blocks: Vec<ElementRef<'_>> = document.select(&PRODUCT_BLOCK).collect();
    let first_index = (page.max(1) as usize - 1) * RESULTS_PER_PAGE;

    let products = blocks
        .iter()
        .enumerate()
        .filter_map(|(i, block)| extract_product(*block, first_index + i, base_url))
        .collect();

    ParsedPage {
        blocks: blocks.len(),
        products,
    }
}

fn extract_product(block: ElementRef<'_>, index: usize, base_url: &str) -> Option<Product> {
    let title = extract_title(block)?;
    let total_price = block
        .select(&TOTAL_PRICE)
        .next()
        .map(|price| clean_total_price(&element_text(price)))
        .unwrap_or(0.0);
    let link = extract_link(block, base_url);

    let (unit_price_kg, unit_price_raw) = block
        .select(&UNIT_PRICE_BLOCK)
        .find_map(|span| extract_unit_price(&compact_text(span)))
        .map(|unit| (unit.per_kg(), unit.raw))
        .unwrap_or((0.0, MISSING_UNIT_PRICE.to_string()));

    let product_id = format!("prod_{}_{:x}", index, product_hash(&title, total_price));

    Some(Product {
        title,
        link,
        total_price,
        unit_price_kg,
        unit_price_raw: Some(unit_price_raw),
        product_id: Some(product_id),
    })
}

fn extract_title(block: ElementRef<'_>) -> Option<String> {
    let title = element_text(block.select(&TITLE).next()?);
    if title.is_empty() {
        return None;
    }
    Some(truncate_title(&title))
}

/// Cuts a title to [`MAX_TITLE_LENGTH`] characters plus "..."
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() <= MAX_TITLE_LENGTH {
        return title.to_string();
    }
    let cut: String = title.chars().take(MAX_TITLE_LENGTH).collect();
    format!("{}...", cut.trim())
}

fn extract_link(block: ElementRef<'_>, base_url: &str) -> String {
    block
        .select(&LINK)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| href.starts_with('/') && (href.contains("/dp/") || href.contains("/gp/product/")))
        .map(|href| {
            let path = href.split('?').next().unwrap_or(href);
            format!("{}{}", base_url, path)
        })
        .unwrap_or_else(|| MISSING_LINK.to_string())
}

/// Text of an element, trimmed
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of an element with each text node trimmed and glued together
fn compact_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

fn product_hash(title: &str, total_price: f64) -> u64 {
    let mut hasher = DefaultHasher::new();
    title.hash(&mut hasher);
    total_price.to_bits().hash(&mut hasher);
    hasher.finish()
}
