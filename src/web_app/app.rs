// web_app/app.rs - Root application component
//
// Entry point of the Leptos application: meta tags, stylesheet, routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::SearchPage;

pub const APP_TITLE: &str = "Unit Price Search";

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Stylesheet produced by cargo-leptos
/// - Router with routes
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    view! {
        <Title text=APP_TITLE />
        <Meta name="description" content="Search scraped products and rank them by price per kilogram" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/unit_price_search.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=SearchPage />
                <Route path=path!("/search") view=SearchPage />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go to Search"</a>
        </div>
    }
}
