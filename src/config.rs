//! Configuration management and validation.
//!
//! Provides the parser configuration: where the distribution lives, how many
//! files are scanned at once, and how each file's records are split across
//! workers.

use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_CONCURRENT_FILES, DEFAULT_QUEUE_DEPTH, ENV_PREFIX,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Global configuration for airmen database ingestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Directory holding the extracted CSV distribution
    pub directory: PathBuf,

    /// Maximum number of files scanned concurrently
    pub max_concurrent_files: usize,

    /// Records per unit of decode work
    pub chunk_size: usize,

    /// Decode workers per file
    pub workers_per_file: usize,

    /// Bounded queue length (in chunks) between a file's reader and its workers
    pub queue_depth: usize,

    /// Whether every file begins with a header line to discard
    pub has_header: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            max_concurrent_files: DEFAULT_MAX_CONCURRENT_FILES,
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers_per_file: default_workers_per_file(),
            queue_depth: DEFAULT_QUEUE_DEPTH,
            has_header: true,
        }
    }
}

/// Split the available cores across the files scanned at once
fn default_workers_per_file() -> usize {
    (num_cpus::get() / DEFAULT_MAX_CONCURRENT_FILES).max(1)
}

impl ParserConfig {
    /// Create a default configuration reading from `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Set the distribution directory
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Set the number of records per unit of work
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the number of decode workers per file
    pub fn with_workers_per_file(mut self, workers: usize) -> Self {
        self.workers_per_file = workers;
        self
    }

    /// Set the per-file queue depth
    pub fn with_queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = depth;
        self
    }

    /// Treat the first line of every file as data rather than a header
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Get the on-disk path for a distribution file
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(Error::configuration("directory must not be empty"));
        }
        if self.max_concurrent_files == 0 {
            return Err(Error::configuration(
                "max_concurrent_files must be greater than zero",
            ));
        }
        if self.chunk_size == 0 {
            return Err(Error::configuration("chunk_size must be greater than zero"));
        }
        if self.workers_per_file == 0 {
            return Err(Error::configuration(
                "workers_per_file must be greater than zero",
            ));
        }
        if self.queue_depth == 0 {
            return Err(Error::configuration("queue_depth must be greater than zero"));
        }
        Ok(())
    }

    /// Build a configuration from defaults overridden by `AIRMEN_*` environment variables
    ///
    /// Recognized variables: `AIRMEN_MAX_CONCURRENT_FILES`, `AIRMEN_CHUNK_SIZE`,
    /// `AIRMEN_WORKERS_PER_FILE`, `AIRMEN_QUEUE_DEPTH`, `AIRMEN_HAS_HEADER`.
    pub fn from_env(directory: impl AsRef<Path>) -> Result<Self> {
        Self::from_lookup(directory, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub(crate) fn from_lookup<F>(directory: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(directory.as_ref());

        if let Some(value) = env_override(&lookup, "MAX_CONCURRENT_FILES")? {
            config.max_concurrent_files = value;
        }
        if let Some(value) = env_override(&lookup, "CHUNK_SIZE")? {
            config.chunk_size = value;
        }
        if let Some(value) = env_override(&lookup, "WORKERS_PER_FILE")? {
            config.workers_per_file = value;
        }
        if let Some(value) = env_override(&lookup, "QUEUE_DEPTH")? {
            config.queue_depth = value;
        }
        if let Some(value) = env_override(&lookup, "HAS_HEADER")? {
            config.has_header = value;
        }

        debug!("Loaded parser configuration: {:?}", config);
        config.validate()?;
        Ok(config)
    }
}

fn env_override<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let key = format!("{}{}", ENV_PREFIX, name);
    match lookup(&key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::configuration(format!("invalid value '{}' for {}: {}", raw, key, e))),
    }
}
