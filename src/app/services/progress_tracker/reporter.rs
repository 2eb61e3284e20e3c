//! Terminal progress bar for hosts that want one
//!
//! Only built with the `progress-bar` feature. The bar follows tracker
//! snapshots through [`ProgressReporter::observer`].

use super::Progress;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Terminal progress bar driven by tracker snapshots
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter with no bar; updates are ignored until set up
    pub fn new() -> Self {
        Self { progress_bar: None }
    }

    /// Set up a byte-based bar for the ingestion run
    pub fn setup_progress(&mut self, total_bytes: u64) {
        let pb = ProgressBar::new(total_bytes);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");
        pb.set_style(style);
        pb.set_message("Reading airmen registry");

        debug!("Progress bar initialized for {} bytes", total_bytes);
        self.progress_bar = Some(pb);
    }

    /// Callback suitable for [`ProgressTracker::with_callback`]
    pub fn observer(&self) -> impl Fn(Progress) + Send + Sync + 'static {
        let progress_bar = self.progress_bar.clone();
        move |progress: Progress| {
            if let Some(pb) = &progress_bar {
                pb.set_length(progress.total);
                pb.set_position(progress.completed);
            }
        }
    }

    pub fn update(&self, progress: Progress) {
        (self.observer())(progress);
    }

    pub fn finish(&self, holders: usize) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_with_message(format!("Completed: {} holders", holders));
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.progress_bar.is_some()
    }

    pub fn completion_percentage(&self) -> f64 {
        match &self.progress_bar {
            Some(pb) if pb.length().unwrap_or(0) > 0 => {
                pb.position() as f64 / pb.length().unwrap_or(1) as f64 * 100.0
            }
            _ => 0.0,
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if let Some(ref pb) = self.progress_bar {
            if !pb.is_finished() {
                pb.finish_and_clear();
            }
        }
    }
}
