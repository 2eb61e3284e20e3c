//! Ingestion statistics and result structures

use super::DataFile;
use crate::app::models::HolderMap;
use std::time::Duration;

/// Outcome of scanning one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub file: DataFile,
    /// Data records read, blank lines excluded
    pub records_read: usize,
    /// Partial holders appended to the database
    pub holders_produced: usize,
    /// Records rejected with a record-level error
    pub records_rejected: usize,
    /// File size in bytes, zero when the file is missing
    pub bytes: u64,
    pub missing: bool,
    /// A file-level error stopped the scan early
    pub failed: bool,
}

impl FileStats {
    pub fn new(file: DataFile) -> Self {
        Self {
            file,
            records_read: 0,
            holders_produced: 0,
            records_rejected: 0,
            bytes: 0,
            missing: false,
            failed: false,
        }
    }

    pub fn missing(file: DataFile) -> Self {
        Self {
            missing: true,
            ..Self::new(file)
        }
    }

    /// Percentage of records that produced a holder
    pub fn success_rate(&self) -> f64 {
        if self.records_read == 0 {
            0.0
        } else {
            (self.holders_produced as f64 / self.records_read as f64) * 100.0
        }
    }
}

/// Statistics for a whole ingestion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestStats {
    /// One entry per requested file, in request order
    pub files: Vec<FileStats>,
    /// Holders in the merged result
    pub holders: usize,
    pub elapsed: Duration,
}

impl IngestStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_read(&self) -> usize {
        self.files.iter().map(|file| file.records_read).sum()
    }

    pub fn records_rejected(&self) -> usize {
        self.files.iter().map(|file| file.records_rejected).sum()
    }

    pub fn files_missing(&self) -> usize {
        self.files.iter().filter(|file| file.missing).count()
    }

    pub fn files_failed(&self) -> usize {
        self.files.iter().filter(|file| file.failed).count()
    }

    /// Percentage of all records read that produced a holder
    pub fn success_rate(&self) -> f64 {
        let read = self.records_read();
        if read == 0 {
            0.0
        } else {
            let produced: usize = self.files.iter().map(|file| file.holders_produced).sum();
            (produced as f64 / read as f64) * 100.0
        }
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} holders from {} records ({} rejected, {} files missing, {} failed) in {:.2}s",
            self.holders,
            self.records_read(),
            self.records_rejected(),
            self.files_missing(),
            self.files_failed(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Merged holders together with the statistics of the run that produced them
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    pub holders: HolderMap,
    pub stats: IngestStats,
}
