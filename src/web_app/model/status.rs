// web_app/model/status.rs - Loading panel state machine
//
// Two states: hidden, or visible with a message and a progress value.
// Only the search controller moves between them.

use super::progress::{Progress, ProgressStyle};

pub const DEFAULT_STATUS_TEXT: &str = "Search in progress...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StatusState {
    #[default]
    Hidden,
    Loading { text: String, progress: Progress },
}

impl StatusState {
    /// Visible panel with the default message
    pub fn loading() -> Self {
        Self::show(DEFAULT_STATUS_TEXT)
    }

    /// Visible panel; progress always restarts at zero
    pub fn show(text: impl Into<String>) -> Self {
        StatusState::Loading {
            text: text.into(),
            progress: Progress::IDLE,
        }
    }

    pub fn hide() -> Self {
        StatusState::Hidden
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, StatusState::Loading { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            StatusState::Hidden => "",
            StatusState::Loading { text, .. } => text,
        }
    }

    pub fn progress(&self) -> Option<Progress> {
        match self {
            StatusState::Hidden => None,
            StatusState::Loading { progress, .. } => Some(*progress),
        }
    }

    /// Updates the bar of a visible panel. A hidden panel has no bar to
    /// update and stays as it is.
    pub fn set_progress(&mut self, value: Progress) {
        if let StatusState::Loading { progress, .. } = self {
            *progress = value;
        }
    }

    pub fn bar_style(&self) -> ProgressStyle {
        match self {
            StatusState::Hidden => ProgressStyle::empty(),
            StatusState::Loading { progress, .. } => progress.style(),
        }
    }
}
