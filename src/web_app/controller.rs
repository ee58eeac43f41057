// web_app/controller.rs - Search form submission lifecycle
//
// The controller knows nothing about Leptos or the browser. It talks to three
// seams so the whole flow runs natively in tests:
// - SearchView: where status, progress and results are shown
// - SearchClient / SearchResponse: the HTTP call to the search endpoint
// - Ticker: the periodic clock driving the simulated progress

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::LocalBoxStream;
use futures::{select_biased, FutureExt, StreamExt};
use thiserror::Error;

use crate::web_app::model::*;

/// Interval between two simulated progress steps
pub const PROGRESS_TICK: Duration = Duration::from_millis(500);

/// Shown when a failed response carries no usable error message
pub const GENERIC_SERVER_ERROR: &str = "Unknown server error";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx answer; displays as the message alone
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Parse(String),
}

/// Message of a failed response body, or the generic fallback when the body
/// is not JSON or has no `error` field.
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// Parses a successful response body.
///
/// The body must be a JSON array. Elements that are not valid products are
/// skipped and logged instead of failing the whole search.
pub fn parse_product_list(body: &str) -> Result<Vec<Product>, SearchError> {
    let items: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let products = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Product>(item) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Skipping malformed product #{}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(products)
}

/// Display surface driven by the controller
pub trait SearchView {
    fn set_status(&self, status: StatusState);
    /// Moves the bar of the visible status panel; no-op when hidden
    fn set_progress(&self, progress: Progress);
    fn render_results(&self, results: ResultsView);
}

/// Answer of the search endpoint whose body has not been read yet
#[async_trait(?Send)]
pub trait SearchResponse {
    fn status(&self) -> u16;

    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    async fn body(&self) -> Result<String, SearchError>;
}

#[async_trait(?Send)]
pub trait SearchClient {
    type Response: SearchResponse;

    /// Resolves as soon as the response status is known
    async fn send(&self, query: &str, pages: u32) -> Result<Self::Response, SearchError>;
}

/// Reads a received response into the product list or the matching error
pub async fn read_products<R: SearchResponse>(response: &R) -> Result<Vec<Product>, SearchError> {
    if !response.ok() {
        let body = response.body().await.unwrap_or_default();
        return Err(SearchError::Server {
            status: response.status(),
            message: server_error_message(&body),
        });
    }
    let body = response.body().await?;
    parse_product_list(&body)
}

/// Source of periodic ticks. Dropping the returned stream stops it.
pub trait Ticker {
    fn every(&self, period: Duration) -> LocalBoxStream<'static, ()>;
}

/// How a call to [`SearchController::submit`] ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query, nothing happened
    Ignored,
    /// Results rendered (count of products received)
    Listed(usize),
    /// Error rendered inline
    Failed,
    /// A newer submission started before this one settled; its response was dropped
    Superseded,
}

#[derive(Clone)]
pub struct SearchController<V, C, T> {
    view: V,
    client: C,
    ticker: T,
    generation: Arc<AtomicU64>,
}

impl<V, C, T> SearchController<V, C, T>
where
    V: SearchView,
    C: SearchClient,
    T: Ticker,
{
    pub fn new(view: V, client: C, ticker: T) -> Self {
        Self {
            view,
            client,
            ticker,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs one search from form submission to rendered results or error
    pub async fn submit(&self, raw_query: &str) -> SubmitOutcome {
        let query = raw_query.trim();
        if query.is_empty() {
            tracing::debug!("Ignoring blank search query");
            return SubmitOutcome::Ignored;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Search request: query='{}', generation={}", query, generation);

        self.view
            .set_status(StatusState::show(format!("Searching for \"{}\"...", query)));
        self.view.render_results(ResultsView::Waiting);

        // the ticker is already stopped once the response is in
        let result = match self.request_with_progress(query, generation).await {
            Ok(response) => read_products(&response).await,
            Err(e) => Err(e),
        };

        if !self.is_current(generation) {
            tracing::debug!("Dropping stale response of generation {}", generation);
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(products) => {
                let count = products.len();
                tracing::info!("Search successful: received {} products", count);
                self.view.set_progress(Progress::COMPLETE);
                self.view.set_status(StatusState::hide());
                self.view.render_results(ResultsView::from_products(products));
                SubmitOutcome::Listed(count)
            }
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", query, e);
                self.view.set_status(StatusState::hide());
                self.view.render_results(ResultsView::failed(&e));
                SubmitOutcome::Failed
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    // The tick stream lives only inside this function, so it is dropped
    // (and the interval cancelled) as soon as the response arrives.
    async fn request_with_progress(
        &self,
        query: &str,
        generation: u64,
    ) -> Result<C::Response, SearchError> {
        let mut ticks = self.ticker.every(PROGRESS_TICK).fuse();
        let request = self.client.send(query, SEARCH_PAGES).fuse();
        futures::pin_mut!(request);

        let mut progress = Progress::IDLE;
        loop {
            select_biased! {
                tick = ticks.next() => {
                    if tick.is_some() && self.is_current(generation) {
                        progress = progress.simulated_step();
                        self.view.set_progress(progress);
                    }
                }
                result = request => return result,
            }
        }
    }
}
