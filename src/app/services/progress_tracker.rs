//! Progress tracking across concurrently scanning sources
//!
//! Each source (one data file) registers a total in its own work unit, bytes
//! for the ingestion pipeline, and advances its completed count as it goes.
//! Readers see the sum over all sources. Completed counts are clamped at the
//! source total, so a snapshot never runs backwards while totals are fixed.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[cfg(feature = "progress-bar")]
mod reporter;

#[cfg(feature = "progress-bar")]
pub use reporter::ProgressReporter;

/// Aggregate progress at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: u64,
    pub total: u64,
}

impl Progress {
    /// Completed share of the total; `None` until a total is known
    pub fn fraction_done(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.completed as f64 / self.total as f64)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SourceProgress {
    completed: u64,
    total: u64,
    finished: bool,
}

type ProgressCallback = Box<dyn Fn(Progress) + Send + Sync>;

/// Thread-safe progress counters keyed by source name
#[derive(Default)]
pub struct ProgressTracker {
    sources: Mutex<BTreeMap<String, SourceProgress>>,
    on_change: Option<ProgressCallback>,
}

impl std::fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("progress", &self.snapshot())
            .field("has_callback", &self.on_change.is_some())
            .finish()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that reports every change to `callback`
    ///
    /// The callback runs on the updating thread while the counters are locked, so
    /// notifications arrive in update order. It must not call back into the tracker.
    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(Progress) + Send + Sync + 'static,
    {
        Self {
            sources: Mutex::default(),
            on_change: Some(Box::new(callback)),
        }
    }

    /// Set the total work for a source, registering it if new
    pub fn update_total(&self, source: &str, total: u64) {
        self.update(source, |entry| {
            entry.total = total;
            entry.completed = entry.completed.min(total);
        });
    }

    /// Record completed work for a source
    pub fn advance(&self, source: &str, amount: u64) {
        self.update(source, |entry| {
            entry.completed = entry.completed.saturating_add(amount).min(entry.total);
        });
    }

    /// Flush a source to its total
    pub fn finish(&self, source: &str) {
        self.update(source, |entry| {
            entry.completed = entry.total;
            entry.finished = true;
        });
        debug!("Progress source {} finished", source);
    }

    /// Sum over all sources
    pub fn snapshot(&self) -> Progress {
        Self::sum(&self.lock())
    }

    /// Progress of one source, if registered
    pub fn source_snapshot(&self, source: &str) -> Option<Progress> {
        self.lock().get(source).map(|entry| Progress {
            completed: entry.completed,
            total: entry.total,
        })
    }

    pub fn fraction_done(&self) -> Option<f64> {
        self.snapshot().fraction_done()
    }

    /// Completion as a percentage, 0.0 until a total is known
    pub fn percent_done(&self) -> f64 {
        self.fraction_done().map_or(0.0, |fraction| fraction * 100.0)
    }

    /// True once at least one source is registered and all have finished
    pub fn is_finished(&self) -> bool {
        let sources = self.lock();
        !sources.is_empty() && sources.values().all(|entry| entry.finished)
    }

    fn update<F>(&self, source: &str, apply: F)
    where
        F: FnOnce(&mut SourceProgress),
    {
        let mut sources = self.lock();
        apply(sources.entry(source.to_string()).or_default());
        if let Some(callback) = &self.on_change {
            callback(Self::sum(&sources));
        }
    }

    fn sum(sources: &BTreeMap<String, SourceProgress>) -> Progress {
        sources.values().fold(Progress::default(), |acc, entry| Progress {
            completed: acc.completed + entry.completed,
            total: acc.total + entry.total,
        })
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, SourceProgress>> {
        self.sources.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
