// web_app/view.rs - Leptos-backed implementation of the controller's view
//
// Each display concern is one signal; components read them, the controller
// writes them.

use leptos::prelude::*;

use crate::web_app::controller::SearchView;
use crate::web_app::model::{Progress, ResultsView, StatusState};

#[derive(Clone, Copy)]
pub struct SignalView {
    pub status: RwSignal<StatusState>,
    pub results: RwSignal<ResultsView>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(StatusState::default()),
            results: RwSignal::new(ResultsView::default()),
        }
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView for SignalView {
    fn set_status(&self, status: StatusState) {
        self.status.set(status);
    }

    fn set_progress(&self, progress: Progress) {
        self.status.update(|status| status.set_progress(progress));
    }

    fn render_results(&self, results: ResultsView) {
        self.results.set(results);
    }
}
