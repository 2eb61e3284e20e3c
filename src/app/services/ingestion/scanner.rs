//! Per-file scan: a blocking CSV reader feeding a bounded chunk queue drained
//! by a fixed number of blocking decode workers
//!
//! The reader runs on the blocking pool and hands off chunks of records with
//! their line numbers and the bytes they span. Each worker decodes and maps a
//! chunk, appends the partial holders to the shared database in one batch,
//! forwards rejected records to the error sink and advances the file's share of
//! the progress tracker.

use super::{DataFile, ErrorSink, FileStats};
use crate::app::services::entity_mapper::map_row;
use crate::app::services::holder_database::{ContributionKey, HolderDatabase};
use crate::app::services::progress_tracker::ProgressTracker;
use crate::app::services::row_decoder::{ColumnLayout, RowDecoder};
use crate::{Error, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

/// Shared collaborators and tuning for every file scan of a run
#[derive(Clone)]
pub(crate) struct ScanContext {
    pub database: Arc<HolderDatabase>,
    pub progress: Option<Arc<ProgressTracker>>,
    pub errors: Arc<dyn ErrorSink>,
    pub chunk_size: usize,
    pub workers_per_file: usize,
    pub queue_depth: usize,
    pub has_header: bool,
}

/// One file scheduled for scanning
#[derive(Debug, Clone)]
pub(crate) struct FileScan {
    pub file: DataFile,
    /// Position of the file in the request
    pub source: usize,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Records handed from the reader to a worker
#[derive(Debug, Default)]
struct Chunk {
    records: Vec<(u64, StringRecord)>,
    /// Bytes of the file consumed to produce this chunk
    bytes: u64,
}

#[derive(Debug, Default, Clone, Copy)]
struct ChunkSummary {
    records: usize,
    holders: usize,
    rejected: usize,
}

/// Scan one file to completion
///
/// File-level failures are reported to the sink and end this scan only. The
/// file's progress is flushed to its total however the scan ends.
pub(crate) async fn scan_file(context: ScanContext, scan: FileScan) -> FileStats {
    let mut stats = FileStats::new(scan.file);
    stats.bytes = scan.bytes;

    info!("Scanning {} ({} bytes)", scan.file, scan.bytes);

    match run_scan(&context, &scan, &mut stats).await {
        Ok(()) => info!(
            "Finished {}: {} records, {} holders, {} rejected",
            scan.file, stats.records_read, stats.holders_produced, stats.records_rejected
        ),
        Err(error) => {
            warn!("Scan of {} stopped early: {}", scan.file, error);
            stats.failed = true;
            context.errors.report(error);
        }
    }

    if let Some(progress) = &context.progress {
        progress.finish(scan.file.file_name());
    }
    stats
}

async fn run_scan(context: &ScanContext, scan: &FileScan, stats: &mut FileStats) -> Result<()> {
    let decoder = RowDecoder::new(scan.file.row_kind())?;
    let (sender, mut receiver) = mpsc::channel::<Chunk>(context.queue_depth);

    let reader = task::spawn_blocking({
        let path = scan.path.clone();
        let file = scan.file;
        let layout = decoder.layout();
        let has_header = context.has_header;
        let chunk_size = context.chunk_size;
        move || read_chunks(&path, file, layout, has_header, chunk_size, sender)
    });

    let semaphore = Arc::new(Semaphore::new(context.workers_per_file));
    let mut workers = JoinSet::new();

    while let Some(chunk) = receiver.recv().await {
        let permit = Arc::clone(&semaphore)
            .acquire_owned()
            .await
            .map_err(|e| Error::task_join(format!("worker pool closed: {}", e)))?;
        let context = context.clone();
        let source = scan.source;
        let file = scan.file;

        workers.spawn_blocking(move || {
            let _permit = permit;
            process_chunk(&context, decoder, source, file, chunk)
        });
    }

    // The queue closes when the reader returns, successfully or not
    let read_result = reader.await?;

    while let Some(joined) = workers.join_next().await {
        let summary = joined?;
        stats.records_read += summary.records;
        stats.holders_produced += summary.holders;
        stats.records_rejected += summary.rejected;
    }

    read_result
}

/// Read the file sequentially, checking the header once, and queue record chunks
fn read_chunks(
    path: &Path,
    file: DataFile,
    layout: &ColumnLayout,
    has_header: bool,
    chunk_size: usize,
    sender: mpsc::Sender<Chunk>,
) -> Result<()> {
    let csv_error = |message: &str, error: csv::Error| {
        Error::csv_parsing(file.file_name(), message, Some(error))
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error("failed to open file", e))?;

    let mut record = ByteRecord::new();
    if has_header {
        if !reader
            .read_byte_record(&mut record)
            .map_err(|e| csv_error("failed to read header", e))?
        {
            debug!("{} is empty", file);
            return Ok(());
        }
        layout.check_header(&StringRecord::from_byte_record_lossy(record.clone()))?;
    }

    let send = |chunk: Chunk| {
        sender
            .blocking_send(chunk)
            .map_err(|_| Error::task_join(format!("chunk queue for {} closed", file)))
    };

    let mut chunk = Chunk::default();
    let mut chunk_start = 0;

    while reader
        .read_byte_record(&mut record)
        .map_err(|e| csv_error("failed to read record", e))?
    {
        let line = record.position().map_or(0, |position| position.line());
        // Names in older editions are not always valid UTF-8
        chunk
            .records
            .push((line, StringRecord::from_byte_record_lossy(record.clone())));

        if chunk.records.len() >= chunk_size {
            let consumed = reader.position().byte();
            chunk.bytes = consumed - chunk_start;
            chunk_start = consumed;
            send(std::mem::take(&mut chunk))?;
        }
    }

    chunk.bytes = reader.position().byte().saturating_sub(chunk_start);
    if !chunk.records.is_empty() || chunk.bytes > 0 {
        send(chunk)?;
    }
    Ok(())
}

/// Decode and map one chunk, then publish its holders, errors and progress
fn process_chunk(
    context: &ScanContext,
    decoder: RowDecoder,
    source: usize,
    file: DataFile,
    chunk: Chunk,
) -> ChunkSummary {
    let mut summary = ChunkSummary::default();
    let mut holders = Vec::with_capacity(chunk.records.len());

    for (line, record) in chunk.records {
        match decoder
            .decode(&record)
            .and_then(|row| row.map(map_row).transpose())
        {
            Ok(Some(holder)) => {
                summary.records += 1;
                holders.push((ContributionKey::new(source, line), holder));
            }
            Ok(None) => {}
            Err(error) => {
                debug!("Skipping {} line {}: {}", file, line, error);
                summary.records += 1;
                summary.rejected += 1;
                context.errors.report(error);
            }
        }
    }

    summary.holders = holders.len();
    context.database.append_all(holders);

    if let Some(progress) = &context.progress {
        progress.advance(file.file_name(), chunk.bytes);
    }
    summary
}
