// common/mod.rs - Test doubles for the search controller
//
// - RecordingView: keeps every call the controller makes, in order
// - StubClient: answers searches from canned replies, counting calls
// - GatedClient: answers only when the test releases a reply
// - FixedTicker: emits a fixed number of ticks, then ends
// - TrackedTicker: emits a few ticks, then waits forever; flags when dropped

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::stream::{self, LocalBoxStream, Stream, StreamExt};
use unit_price_search::web_app::controller::{
    SearchClient, SearchError, SearchResponse, SearchView, Ticker,
};
use unit_price_search::web_app::model::{Product, Progress, ResultsView, StatusState};

#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    Status(StatusState),
    Progress(Progress),
    Results(ResultsView),
}

#[derive(Clone, Default)]
pub struct RecordingView {
    events: Rc<RefCell<Vec<ViewEvent>>>,
    status: Rc<RefCell<StatusState>>,
    results: Rc<RefCell<ResultsView>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn status(&self) -> StatusState {
        self.status.borrow().clone()
    }

    pub fn results(&self) -> ResultsView {
        self.results.borrow().clone()
    }

    /// Progress values the bar actually displayed, in order
    pub fn shown_progress(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Progress(p) => Some(p.percent()),
                _ => None,
            })
            .collect()
    }
}

impl SearchView for RecordingView {
    fn set_status(&self, status: StatusState) {
        self.events.borrow_mut().push(ViewEvent::Status(status.clone()));
        *self.status.borrow_mut() = status;
    }

    fn set_progress(&self, progress: Progress) {
        self.events.borrow_mut().push(ViewEvent::Progress(progress));
        self.status.borrow_mut().set_progress(progress);
    }

    fn render_results(&self, results: ResultsView) {
        self.events.borrow_mut().push(ViewEvent::Results(results.clone()));
        *self.results.borrow_mut() = results;
    }
}

/// What the stub server answers
#[derive(Clone, Debug)]
pub enum Reply {
    /// 200 with this body
    Body(String),
    /// Non-2xx status with this body
    Status(u16, String),
    /// The request never reached the server
    Unreachable,
}

/// Response handed out by the stub clients
pub struct StubResponse {
    status: u16,
    body: String,
    /// Flag sampled when the body is read, with where to record it
    watch: Option<(Rc<Cell<bool>>, Rc<RefCell<Vec<bool>>>)>,
}

impl StubResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            watch: None,
        }
    }
}

#[async_trait(?Send)]
impl SearchResponse for StubResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn body(&self) -> Result<String, SearchError> {
        if let Some((flag, seen)) = &self.watch {
            seen.borrow_mut().push(flag.get());
        }
        Ok(self.body.clone())
    }
}

#[derive(Clone)]
pub struct StubClient {
    reply: Reply,
    calls: Rc<RefCell<Vec<(String, u32)>>>,
    watched: Option<Rc<Cell<bool>>>,
    seen_at_body_read: Rc<RefCell<Vec<bool>>>,
}

impl StubClient {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Rc::default(),
            watched: None,
            seen_at_body_read: Rc::default(),
        }
    }

    pub fn products(products: &[Product]) -> Self {
        let body = serde_json::to_string(products).expect("products serialize");
        Self::new(Reply::Body(body))
    }

    /// Samples `flag` every time a response body is read
    pub fn watching(mut self, flag: Rc<Cell<bool>>) -> Self {
        self.watched = Some(flag);
        self
    }

    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.borrow().clone()
    }

    /// Values of the watched flag at each body read
    pub fn seen_at_body_read(&self) -> Vec<bool> {
        self.seen_at_body_read.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SearchClient for StubClient {
    type Response = StubResponse;

    async fn send(&self, query: &str, pages: u32) -> Result<StubResponse, SearchError> {
        self.calls.borrow_mut().push((query.to_string(), pages));
        let mut response = match &self.reply {
            Reply::Body(body) => StubResponse::new(200, body.clone()),
            Reply::Status(status, body) => StubResponse::new(*status, body.clone()),
            Reply::Unreachable => {
                return Err(SearchError::Network("connection refused".to_string()))
            }
        };
        response.watch = self
            .watched
            .clone()
            .map(|flag| (flag, self.seen_at_body_read.clone()));
        Ok(response)
    }
}

pub type GatedReply = Result<Vec<Product>, SearchError>;

/// Each search waits on the next queued receiver
#[derive(Clone, Default)]
pub struct GatedClient {
    gates: Rc<RefCell<VecDeque<oneshot::Receiver<GatedReply>>>>,
}

impl GatedClient {
    /// Queues a gate for the next search and returns its release handle
    pub fn gate(&self) -> oneshot::Sender<GatedReply> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().push_back(rx);
        tx
    }
}

#[async_trait(?Send)]
impl SearchClient for GatedClient {
    type Response = StubResponse;

    async fn send(&self, _query: &str, _pages: u32) -> Result<StubResponse, SearchError> {
        let gate = self.gates.borrow_mut().pop_front();
        let reply = match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(SearchError::Network("gate dropped".to_string()))),
            None => Err(SearchError::Network("no gate queued".to_string())),
        };
        let products = reply?;
        let body = serde_json::to_string(&products).expect("products serialize");
        Ok(StubResponse::new(200, body))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker(pub usize);

impl Ticker for FixedTicker {
    fn every(&self, _period: Duration) -> LocalBoxStream<'static, ()> {
        stream::iter(std::iter::repeat(()).take(self.0)).boxed_local()
    }
}

/// Ticker whose stream never ends on its own
#[derive(Clone, Debug, Default)]
pub struct TrackedTicker {
    ticks: usize,
    dropped: Rc<Cell<bool>>,
}

impl TrackedTicker {
    pub fn new(ticks: usize) -> Self {
        Self {
            ticks,
            dropped: Rc::default(),
        }
    }

    /// Set once the last tick stream handed out has been dropped
    pub fn dropped(&self) -> Rc<Cell<bool>> {
        self.dropped.clone()
    }
}

impl Ticker for TrackedTicker {
    fn every(&self, _period: Duration) -> LocalBoxStream<'static, ()> {
        self.dropped.set(false);
        TrackedTicks {
            inner: stream::iter(std::iter::repeat(()).take(self.ticks))
                .chain(stream::pending())
                .boxed_local(),
            dropped: self.dropped.clone(),
        }
        .boxed_local()
    }
}

struct TrackedTicks {
    inner: LocalBoxStream<'static, ()>,
    dropped: Rc<Cell<bool>>,
}

impl Stream for TrackedTicks {
    type Item = ();

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<()>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl Drop for TrackedTicks {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}
