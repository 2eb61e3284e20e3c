//! Destinations for non-fatal ingestion errors

use crate::Error;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receiver of every record-level and file-level error raised during a parse
///
/// Sinks are shared between file tasks and called from worker threads.
pub trait ErrorSink: Send + Sync {
    fn report(&self, error: Error);
}

impl<F> ErrorSink for F
where
    F: Fn(Error) + Send + Sync,
{
    fn report(&self, error: Error) {
        self(error)
    }
}

/// Sink that discards every error
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn report(&self, _error: Error) {}
}

/// Sink that keeps every error for later inspection
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Mutex<Vec<Error>>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Number of collected errors matching a predicate
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Error) -> bool,
    {
        self.lock().iter().filter(|&error| predicate(error)).count()
    }

    /// Display strings of the collected errors, in report order
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(ToString::to_string).collect()
    }

    /// Take every collected error, leaving the collector empty
    pub fn take(&self) -> Vec<Error> {
        std::mem::take(&mut *self.lock())
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Error>> {
        self.errors.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ErrorSink for ErrorCollector {
    fn report(&self, error: Error) {
        self.lock().push(error);
    }
}
