// web_app/pages/search.rs - Search page component
//
// Composes the form, the status panel and the result list, and owns the
// controller that drives them for the lifetime of the page.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::view::SignalView;

/// Main search page component
#[component]
pub fn SearchPage() -> impl IntoView {
    let signals = SignalView::new();
    let on_search = search_callback(signals);

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Unit Price Search"</h1>
                <p class="subtitle">"Products ranked by price per kilogram"</p>
            </header>

            <main class="page-content">
                <SearchForm on_search=on_search />
                <StatusPanel status=signals.status.into() />
                <ResultList results=signals.results.into() />
            </main>
        </div>
    }
}

// One controller per page, so its generation counter spans every submission.
#[cfg(feature = "hydrate")]
fn search_callback(signals: SignalView) -> Callback<String> {
    use crate::web_app::client::{HttpSearchClient, IntervalTicker};
    use crate::web_app::controller::SearchController;
    use leptos::task::spawn_local;

    let controller = SearchController::new(signals, HttpSearchClient::default(), IntervalTicker);

    Callback::new(move |query: String| {
        let controller = controller.clone();
        spawn_local(async move {
            controller.submit(&query).await;
        });
    })
}

#[cfg(not(feature = "hydrate"))]
fn search_callback(_signals: SignalView) -> Callback<String> {
    Callback::new(|query: String| {
        tracing::debug!("Search '{}' submitted outside the browser, ignoring", query);
    })
}
