// web_app/components/status.rs - Loading panel and progress bar

use leptos::prelude::*;

use crate::web_app::model::{ProgressStyle, StatusState};

pub const STATUS_ID: &str = "status";
pub const LOADING_TEXT_ID: &str = "loading-text";
pub const PROGRESS_BAR_ID: &str = "progress-bar";

/// Striped progress bar with its percentage label
#[component]
pub fn ProgressBar(
    /// Width, label and fill of the bar
    bar: Signal<ProgressStyle>,
) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div id=PROGRESS_BAR_ID class="progress-bar" style=move || bar.get().css()>
                {move || bar.get().label}
            </div>
        </div>
    }
}

/// Loading panel shown while a search is in flight
#[component]
pub fn StatusPanel(status: Signal<StatusState>) -> impl IntoView {
    let class = move || {
        if status.get().is_visible() {
            "status-panel"
        } else {
            "status-panel hidden"
        }
    };
    let bar_style = Signal::derive(move || status.get().bar_style());

    view! {
        <div id=STATUS_ID class=class>
            <p id=LOADING_TEXT_ID class="loading-text">
                {move || status.get().text().to_string()}
            </p>
            <ProgressBar bar=bar_style />
        </div>
    }
}
