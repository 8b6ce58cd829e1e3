//! Live solution counter shown while a search runs

use crate::algorithm::registry::SolutionObserver;
use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] searching, {pos} solution(s) so far")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting how many solutions have been found
///
/// Cloning yields another handle to the same spinner, so one handle can be
/// given to the registry while another drives logging and shutdown.
#[derive(Debug, Clone)]
pub struct SearchProgress {
    bar: ProgressBar,
    highest: Arc<AtomicU64>,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a visible spinner on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self {
            bar,
            highest: Arc::default(),
        }
    }

    /// Create a spinner that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            highest: Arc::default(),
        }
    }

    /// Underlying progress bar, for coordinating other terminal output
    pub const fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    /// Highest solution total reported so far
    pub fn solutions(&self) -> u64 {
        self.highest.load(Ordering::SeqCst)
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SolutionObserver for SearchProgress {
    fn solution_found(&self, total: usize) {
        let total = total as u64;
        // Totals may arrive out of order; only gains over the maximum move the bar.
        let previous = self.highest.fetch_max(total, Ordering::SeqCst);
        if total > previous {
            self.bar.inc(total - previous);
        }
    }
}
