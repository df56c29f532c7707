//! Spinner shown while a download index is fetched
//!
//! Disabled in quiet and JSON mode so stdout stays machine-readable.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a single index fetch
pub struct FetchSpinner {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl FetchSpinner {
    /// Create a spinner that only draws when `enabled`
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Start spinning with a message naming `url`
    pub fn start(&mut self, url: &str) {
        if !self.enabled {
            return;
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(format!("Fetching {}", url));
        bar.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(bar);
    }

    /// Stop the spinner and erase its line
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
