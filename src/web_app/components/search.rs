// web_app/components/search.rs - Search form
//
// Holds the text being typed locally and hands the raw value to the page on
// submit. Trimming and the blank-query check belong to the controller.

use leptos::prelude::*;

pub const FORM_ID: &str = "search-form";
pub const INPUT_ID: &str = "search-input";

/// Search bar with a single text input and submit button
#[component]
pub fn SearchForm(
    /// Called with the raw input value when the form is submitted
    on_search: Callback<String>,
    #[prop(default = "Product (e.g. basmati rice, coffee beans)...")]
    placeholder: &'static str,
) -> impl IntoView {
    let local_query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(local_query.get_untracked());
    };

    view! {
        <form id=FORM_ID class="search-form" on:submit=on_submit>
            <input
                id=INPUT_ID
                type="text"
                name="query"
                autocomplete="off"
                placeholder=placeholder
                class="search-input"
                prop:value=move || local_query.get()
                on:input=move |ev| local_query.set(event_target_value(&ev))
            />
            <button type="submit" class="search-button">"Search"</button>
        </form>
    }
}
