// web_app/components/product.rs - Result list components
//
// - ResultList: the results area, whatever state it is in
// - ProductRow: one ranked product

use leptos::prelude::*;

use super::common::{ErrorDisplay, Loading};
use crate::web_app::model::results::{NO_RESULTS_TEXT, WAITING_TEXT};
use crate::web_app::model::{ProductEntry, ResultsView};

pub const RESULTS_ID: &str = "results";

/// One product: title linking to the listing, unit price, total price
#[component]
pub fn ProductRow(entry: ProductEntry) -> impl IntoView {
    view! {
        <li class="product">
            <a
                class="product-title"
                href=entry.link
                target="_blank"
                rel="noopener noreferrer"
            >
                {entry.title}
            </a>
            <div class="product-prices">
                <span class="unit-price">{format!("{} €/kg", entry.unit_price)}</span>
                <span class="total-price">{format!("{} €", entry.total_price)}</span>
            </div>
        </li>
    }
}

/// Results area, cheapest unit price first
#[component]
pub fn ResultList(results: Signal<ResultsView>) -> impl IntoView {
    view! {
        <section id=RESULTS_ID class="results">
            {move || match results.get() {
                ResultsView::Idle => ().into_any(),
                ResultsView::Waiting => view! { <Loading message=WAITING_TEXT /> }.into_any(),
                ResultsView::Empty => view! {
                    <p class="no-results">{NO_RESULTS_TEXT}</p>
                }.into_any(),
                ResultsView::Failed(message) => view! { <ErrorDisplay error=message /> }.into_any(),
                ResultsView::Listed(entries) => view! {
                    <ol class="product-list">
                        {entries
                            .into_iter()
                            .map(|entry| view! { <ProductRow entry=entry /> })
                            .collect_view()}
                    </ol>
                }.into_any(),
            }}
        </section>
    }
}
