// web_app/components/common.rs - Reusable UI components
//
// Small stateless pieces shared by the search page.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <span class="loading-message">{message}</span>
        </div>
    }
}

/// Inline error shown in the results area
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
) -> impl IntoView {
    view! {
        <div class="error-box" role="alert">
            <span class="error-icon">"⚠"</span>
            <p class="error-message">{error}</p>
        </div>
    }
}

