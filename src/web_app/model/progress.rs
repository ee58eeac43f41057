// web_app/model/progress.rs - Progress indicator value and styling

/// Diagonal stripes drawn over the solid fill while a search runs
const STRIPE_LAYER: &str = "linear-gradient(45deg, rgba(255, 255, 255, 0.15) 25%, transparent 25%, \
     transparent 50%, rgba(255, 255, 255, 0.15) 50%, rgba(255, 255, 255, 0.15) 75%, \
     transparent 75%, transparent)";

const FILL_LAYER: &str = "linear-gradient(#2e7d32, #2e7d32)";

/// Percentage added on each simulated tick
pub const SIMULATED_STEP: u8 = 3;

/// Simulated progress stays strictly below this while the request is pending
pub const SIMULATED_CEILING: u8 = 90;

/// Percentage shown in the progress bar, always within 0..=100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub const IDLE: Progress = Progress(0);
    pub const COMPLETE: Progress = Progress(100);

    pub fn new(percent: u8) -> Self {
        Progress(percent.min(100))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Next value of the cosmetic animation.
    ///
    /// Moves by [`SIMULATED_STEP`] unless that would reach [`SIMULATED_CEILING`],
    /// in which case the value holds.
    pub fn simulated_step(self) -> Self {
        let next = self.0.saturating_add(SIMULATED_STEP);
        if next < SIMULATED_CEILING {
            Progress(next)
        } else {
            self
        }
    }

    pub fn style(self) -> ProgressStyle {
        let width = format!("{}%", self.0);
        if self.0 == 0 {
            ProgressStyle {
                label: width.clone(),
                width,
                background_image: None,
            }
        } else {
            ProgressStyle {
                label: width.clone(),
                width,
                background_image: Some(format!("{STRIPE_LAYER}, {FILL_LAYER}")),
            }
        }
    }
}

/// Rendered state of the progress bar element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressStyle {
    pub width: String,
    pub label: String,
    /// `None` clears the fill (idle bar)
    pub background_image: Option<String>,
}

impl ProgressStyle {
    /// Bar of a hidden status panel: no width, no fill
    pub fn empty() -> Self {
        ProgressStyle {
            width: String::new(),
            label: String::new(),
            background_image: None,
        }
    }

    /// Inline `style` attribute for the bar element
    pub fn css(&self) -> String {
        let mut css = String::new();
        if !self.width.is_empty() {
            css.push_str(&format!("width: {};", self.width));
        }
        match &self.background_image {
            Some(image) => css.push_str(&format!(" background-image: {image}; background-size: 40px 40px;")),
            None => css.push_str(" background-image: none;"),
        }
        css.trim_start().to_string()
    }
}
