// tests/scraper_pagination_tests.rs - Page-by-page scraping against a local shop
//
// A throwaway actix server stands in for the marketplace: it serves one
// scripted answer per page and records which pages were requested.
//
// Run with: cargo test --test scraper_pagination_tests --features ssr

use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use unit_price_search::fixtures::{search_page_html, Listing};
use unit_price_search::web_app::api::config::ScraperConfig;
use unit_price_search::web_app::api::marketplace::{MarketplaceScraper, ProductSource, ScrapeError};

/// Scripted answer for one result page
#[derive(Clone, Debug)]
enum ShopPage {
    Html(String),
    Status(u16),
}

struct Shop {
    pages: Vec<ShopPage>,
    requests: Mutex<Vec<(String, u32)>>,
}

impl Shop {
    fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().unwrap().iter().map(|(_, page)| *page).collect()
    }
}

#[derive(Deserialize)]
struct PageParams {
    k: String,
    page: Option<u32>,
}

async fn result_page(shop: web::Data<Shop>, params: web::Query<PageParams>) -> HttpResponse {
    let page = params.page.unwrap_or(1);
    shop.requests.lock().unwrap().push((params.k.clone(), page));

    match shop.pages.get(page as usize - 1).cloned() {
        Some(ShopPage::Html(html)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Some(ShopPage::Status(code)) => {
            HttpResponse::build(StatusCode::from_u16(code).unwrap()).finish()
        }
        None => HttpResponse::Ok().body(search_page_html(&[])),
    }
}

/// Starts the shop on a free port and returns a scraper pointed at it
async fn open_shop(pages: Vec<ShopPage>) -> (MarketplaceScraper, web::Data<Shop>, ServerHandle) {
    let shop = web::Data::new(Shop {
        pages,
        requests: Mutex::new(Vec::new()),
    });
    let data = shop.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/s", web::get().to(result_page))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let scraper = MarketplaceScraper::new(ScraperConfig {
        base_url: format!("http://{}", addr),
        timeout: Duration::from_secs(5),
        ..ScraperConfig::default()
    })
    .unwrap();

    (scraper, shop, handle)
}

fn page_of(titles: &[&str]) -> ShopPage {
    let listings: Vec<Listing> = titles
        .iter()
        .map(|title| Listing::new(title).price("2,00 €").unit_price("(4,00 €/kg)"))
        .collect();
    ShopPage::Html(search_page_html(&listings))
}

#[actix_web::test]
async fn test_empty_page_ends_pagination() {
    let (scraper, shop, handle) = open_shop(vec![
        page_of(&["Riz basmati", "Riz complet"]),
        page_of(&[]),
        page_of(&["Never reached"]),
    ])
    .await;

    let products = scraper.search("riz basmati", 5).await.unwrap();

    let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Riz basmati", "Riz complet"]);
    assert_eq!(shop.requested_pages(), vec![1, 2]);
    assert_eq!(shop.requests.lock().unwrap()[0].0, "riz basmati");

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_first_page_failure_is_an_error() {
    let (scraper, shop, handle) = open_shop(vec![ShopPage::Status(503)]).await;

    let result = scraper.search("riz", 3).await;

    match result {
        Err(ScrapeError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected a status error, got {:?}", other),
    }
    assert_eq!(shop.requested_pages(), vec![1]);

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_later_page_failure_keeps_collected_products() {
    let (scraper, shop, handle) = open_shop(vec![
        page_of(&["Pâtes"]),
        ShopPage::Status(503),
        page_of(&["Never reached"]),
    ])
    .await;

    let products = scraper.search("pâtes", 3).await.unwrap();

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].title, "Pâtes");
    assert_eq!(shop.requested_pages(), vec![1, 2]);

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_stops_after_requested_page_count() {
    let (scraper, shop, handle) = open_shop(vec![
        page_of(&["A"]),
        page_of(&["B"]),
        page_of(&["C"]),
    ])
    .await;

    let products = scraper.search("café", 2).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(shop.requested_pages(), vec![1, 2]);

    handle.stop(false).await;
}
