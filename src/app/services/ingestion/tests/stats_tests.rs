//! Tests for ingestion statistics

use crate::app::services::ingestion::{DataFile, FileStats, IngestStats};
use std::time::Duration;

fn file_stats(file: DataFile, read: usize, produced: usize) -> FileStats {
    FileStats {
        records_read: read,
        holders_produced: produced,
        records_rejected: read - produced,
        ..FileStats::new(file)
    }
}

#[test]
fn test_file_success_rate() {
    assert_eq!(FileStats::new(DataFile::PilotBasic).success_rate(), 0.0);
    assert_eq!(file_stats(DataFile::PilotCert, 4, 3).success_rate(), 75.0);
}

#[test]
fn test_run_totals() {
    let stats = IngestStats {
        files: vec![
            file_stats(DataFile::PilotBasic, 6, 4),
            file_stats(DataFile::PilotCert, 4, 4),
            FileStats::missing(DataFile::NonPilotCert),
        ],
        holders: 5,
        elapsed: Duration::from_millis(1500),
    };

    assert_eq!(stats.records_read(), 10);
    assert_eq!(stats.records_rejected(), 2);
    assert_eq!(stats.files_missing(), 1);
    assert_eq!(stats.files_failed(), 0);
    assert_eq!(stats.success_rate(), 80.0);
    assert!(stats.summary().starts_with("5 holders from 10 records"));
}
