// web_app/client.rs - Browser implementations of the controller seams
//
// Compiled for the hydrate (WASM) build only: HTTP through gloo-net and the
// progress clock through gloo-timers.

use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{LocalBoxStream, StreamExt};
use gloo_net::http::{Request, Response};
use gloo_timers::future::IntervalStream;

use crate::web_app::controller::{SearchClient, SearchError, SearchResponse, Ticker};
use crate::web_app::model::SEARCH_ENDPOINT;

/// Calls the search endpoint of the server that served the page
#[derive(Clone, Debug)]
pub struct HttpSearchClient {
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpSearchClient {
    fn default() -> Self {
        Self::new(SEARCH_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl SearchClient for HttpSearchClient {
    type Response = FetchResponse;

    async fn send(&self, query: &str, pages: u32) -> Result<FetchResponse, SearchError> {
        let pages = pages.to_string();
        Request::get(&self.endpoint)
            .query([("query", query), ("pages", pages.as_str())])
            .send()
            .await
            .map(FetchResponse)
            .map_err(|e| SearchError::Network(e.to_string()))
    }
}

/// Response of a `fetch` call; the body is read on demand
pub struct FetchResponse(Response);

#[async_trait(?Send)]
impl SearchResponse for FetchResponse {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn ok(&self) -> bool {
        self.0.ok()
    }

    async fn body(&self) -> Result<String, SearchError> {
        self.0
            .text()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))
    }
}

/// `setInterval`-backed ticker
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn every(&self, period: Duration) -> LocalBoxStream<'static, ()> {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        IntervalStream::new(millis).boxed_local()
    }
}
