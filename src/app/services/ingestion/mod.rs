//! Concurrent ingestion of the registry distribution
//!
//! This module drives a full parse: it resolves each requested file in the
//! configured directory, scans the files concurrently, and merges every partial
//! holder into the final identifier to holder map. Record-level and file-level
//! errors go to a caller-supplied [`ErrorSink`]; none of them abort the run.
//!
//! # Architecture
//!
//! - [`data_file`] - The four distribution files and their row kinds
//! - [`scanner`] - Per-file reader, bounded chunk queue and decode workers
//! - [`sink`] - Error sinks: closures, [`ErrorCollector`] and [`NoopSink`]
//! - [`stats`] - Per-file and per-run statistics
//!
//! # Ordering
//!
//! Files finish in any order. Partial holders are keyed by the position of
//! their file in the request and their line number, so a file requested later
//! overrides the name, address and medical fields contributed by earlier files,
//! run after run.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use airmen_registry::{AirmenParser, DataFile, ErrorCollector, ParserConfig, ProgressTracker};
//! use std::sync::Arc;
//!
//! # async fn example() -> airmen_registry::Result<()> {
//! let parser = AirmenParser::new(ParserConfig::new("/data/airmen"))?;
//! let progress = Arc::new(ProgressTracker::new());
//! let errors = Arc::new(ErrorCollector::new());
//!
//! let holders = parser
//!     .parse(&DataFile::ALL, Some(progress.clone()), errors.clone())
//!     .await?;
//!
//! println!("{} holders, {} errors", holders.len(), errors.len());
//! # Ok(())
//! # }
//! ```

pub mod data_file;
pub(crate) mod scanner;
pub mod sink;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use data_file::DataFile;
pub use sink::{ErrorCollector, ErrorSink, NoopSink};
pub use stats::{FileStats, IngestOutcome, IngestStats};

use crate::app::models::HolderMap;
use crate::app::services::holder_database::HolderDatabase;
use crate::app::services::progress_tracker::ProgressTracker;
use crate::app::services::row_decoder::{RowDecoder, RowKind};
use crate::config::ParserConfig;
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use scanner::{FileScan, ScanContext};
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;
use tracing::{info, warn};

/// Parser for a directory holding the registry distribution
#[derive(Debug, Clone)]
pub struct AirmenParser {
    config: ParserConfig,
}

impl AirmenParser {
    /// Create a parser, validating the configuration and every column layout
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        for kind in [RowKind::Basic, RowKind::PilotCert, RowKind::NonPilotCert] {
            RowDecoder::new(kind)?;
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the requested files into one holder per identifier
    pub async fn parse(
        &self,
        files: &[DataFile],
        progress: Option<Arc<ProgressTracker>>,
        errors: Arc<dyn ErrorSink>,
    ) -> Result<HolderMap> {
        Ok(self.parse_with_stats(files, progress, errors).await?.holders)
    }

    /// Parse the requested files and report per-file statistics
    ///
    /// A file requested twice is scanned once, at its first position. Only an
    /// empty request or a directory path that is not a directory fail the run.
    pub async fn parse_with_stats(
        &self,
        files: &[DataFile],
        progress: Option<Arc<ProgressTracker>>,
        errors: Arc<dyn ErrorSink>,
    ) -> Result<IngestOutcome> {
        let start_time = Instant::now();

        let mut requested: Vec<DataFile> = Vec::with_capacity(files.len());
        for file in files {
            if !requested.contains(file) {
                requested.push(*file);
            }
        }
        if requested.is_empty() {
            return Err(Error::configuration("no data files requested"));
        }
        if let Ok(metadata) = fs::metadata(&self.config.directory).await {
            if !metadata.is_dir() {
                return Err(Error::configuration(format!(
                    "{} is not a directory",
                    self.config.directory.display()
                )));
            }
        }

        info!(
            "Parsing {} files from {}",
            requested.len(),
            self.config.directory.display()
        );

        // Register every total before any scan starts so the aggregate never regresses
        let mut stats = IngestStats::new();
        let mut scans = Vec::with_capacity(requested.len());
        for (source, file) in requested.into_iter().enumerate() {
            let path = self.config.file_path(file.file_name());
            match fs::metadata(&path).await {
                Ok(metadata) => {
                    if let Some(progress) = &progress {
                        progress.update_total(file.file_name(), metadata.len());
                    }
                    scans.push(FileScan {
                        file,
                        source,
                        path,
                        bytes: metadata.len(),
                    });
                }
                Err(error) => {
                    let (file_stats, reported) = if error.kind() == ErrorKind::NotFound {
                        (FileStats::missing(file), Error::file_not_found(&path))
                    } else {
                        let mut failed = FileStats::new(file);
                        failed.failed = true;
                        let message = format!("failed to stat {}", path.display());
                        (failed, Error::io(message, error))
                    };
                    warn!("Skipping {}: {}", file, reported);
                    errors.report(reported);
                    if let Some(progress) = &progress {
                        progress.update_total(file.file_name(), 0);
                        progress.finish(file.file_name());
                    }
                    stats.files.push(file_stats);
                }
            }
        }

        let database = Arc::new(HolderDatabase::new());
        let context = ScanContext {
            database: Arc::clone(&database),
            progress,
            errors,
            chunk_size: self.config.chunk_size,
            workers_per_file: self.config.workers_per_file,
            queue_depth: self.config.queue_depth,
            has_header: self.config.has_header,
        };

        let scanned: Vec<FileStats> = stream::iter(scans)
            .map(|scan| scanner::scan_file(context.clone(), scan))
            .buffer_unordered(self.config.max_concurrent_files)
            .collect()
            .await;
        stats.files.extend(scanned);
        stats.files.sort_by_key(|file_stats| {
            files
                .iter()
                .position(|file| *file == file_stats.file)
                .unwrap_or(usize::MAX)
        });

        let holders = database.merge();
        stats.holders = holders.len();
        stats.elapsed = start_time.elapsed();

        info!("Ingestion complete: {}", stats.summary());
        Ok(IngestOutcome { holders, stats })
    }
}
