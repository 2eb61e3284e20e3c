//! Airmen Registry Library
//!
//! A Rust library for loading the FAA releasable airmen certification database
//! (the CSV distribution) into an in-memory index keyed by airman identifier.
//!
//! This library provides tools for:
//! - Decoding the positional CSV rows of each data file into typed rows
//! - Validating the certificate, level and rating taxonomies embedded in short codes
//! - Mapping rows into partial holder records with per-certificate expansion rules
//! - Scanning several data files concurrently with unified progress reporting
//! - Merging partial records from every file into one canonical holder per identifier
//! - Non-fatal error reporting that never halts a scan

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod entity_mapper;
        pub mod holder_database;
        pub mod ingestion;
        pub mod progress_tracker;
        pub mod row_decoder;
    }
}

// Re-export commonly used types
pub use app::models::{
    Address, Certificate, CertificateKind, Holder, HolderMap, Medical, MedicalClass, PilotLevel,
    PilotRating, RiggerLevel,
};
pub use app::services::holder_database::HolderDatabase;
pub use app::services::ingestion::{
    AirmenParser, DataFile, ErrorCollector, ErrorSink, IngestOutcome, IngestStats, NoopSink,
};
pub use app::services::progress_tracker::{Progress, ProgressTracker};
pub use config::ParserConfig;

use std::path::PathBuf;

/// Result type alias for airmen registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for decoding, mapping and ingesting the airmen database
///
/// Record-level variants carry the offending raw value and the identifier of the
/// record they were raised for. They never abort a scan; see [`Error::is_record_error`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A date field was not in `MMDDYY` or `MMDDYYYY` form
    #[error("Invalid date '{value}' in {field} for record {unique_id}")]
    InvalidDate {
        value: String,
        field: &'static str,
        unique_id: String,
    },

    /// A certificate row did not have a type code
    #[error("No certificate type for record {unique_id}")]
    CertificateTypeNotGiven { unique_id: String },

    /// A certificate that requires a level did not have one
    #[error("No certificate level for record {unique_id}")]
    LevelNotGiven { unique_id: String },

    /// An expiring certificate did not have an expiration date
    #[error("No certificate expiration date for record {unique_id}")]
    ExpirationDateNotGiven { unique_id: String },

    /// A medical class was given without an issue date
    #[error("No medical date for record {unique_id}")]
    MedicalWithoutDate { unique_id: String },

    /// Unrecognized medical class code
    #[error("Unknown medical class '{class}' for record {unique_id}")]
    UnknownMedicalClass { class: String, unique_id: String },

    /// Unrecognized certificate type code
    #[error("Unknown certificate type '{code}' for record {unique_id}")]
    UnknownCertificateType { code: String, unique_id: String },

    /// Unrecognized certificate level code, or a level on a kind that takes none
    #[error("Unknown certificate level '{level}' for record {unique_id}")]
    UnknownCertificateLevel { level: String, unique_id: String },

    /// Unrecognized rating code
    #[error("Unknown rating '{rating}' for record {unique_id}")]
    UnknownRating { rating: String, unique_id: String },

    /// The left part of a rating did not match the certificate type tag
    #[error("Unknown rating level '{level}' for record {unique_id}")]
    UnknownRatingLevel { level: String, unique_id: String },

    /// A rating was not of the form `<sublevel>/<code>`
    #[error("Improperly formatted rating '{rating}' for record {unique_id}")]
    InvalidRating { rating: String, unique_id: String },

    /// A record had fewer fields than its layout requires
    #[error("Record {unique_id} has {found} fields, expected at least {expected} ('{field}' missing)")]
    TruncatedRecord {
        unique_id: String,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A data file was not present in the distribution directory
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// A file header or layout table did not match the expected shape
    #[error("Layout mismatch for {layout}: {message}")]
    LayoutMismatch {
        layout: &'static str,
        message: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reading error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A background scan task panicked or was cancelled
    #[error("Task failed: {message}")]
    TaskJoin { message: String },
}

impl Error {
    /// Create an invalid date error
    pub fn invalid_date(
        value: impl Into<String>,
        field: &'static str,
        unique_id: impl Into<String>,
    ) -> Self {
        Self::InvalidDate {
            value: value.into(),
            field,
            unique_id: unique_id.into(),
        }
    }

    /// Create a missing certificate type error
    pub fn certificate_type_not_given(unique_id: impl Into<String>) -> Self {
        Self::CertificateTypeNotGiven {
            unique_id: unique_id.into(),
        }
    }

    /// Create a missing level error
    pub fn level_not_given(unique_id: impl Into<String>) -> Self {
        Self::LevelNotGiven {
            unique_id: unique_id.into(),
        }
    }

    /// Create a missing expiration date error
    pub fn expiration_date_not_given(unique_id: impl Into<String>) -> Self {
        Self::ExpirationDateNotGiven {
            unique_id: unique_id.into(),
        }
    }

    /// Create a medical-without-date error
    pub fn medical_without_date(unique_id: impl Into<String>) -> Self {
        Self::MedicalWithoutDate {
            unique_id: unique_id.into(),
        }
    }

    /// Create an unknown medical class error
    pub fn unknown_medical_class(class: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self::UnknownMedicalClass {
            class: class.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create an unknown certificate type error
    pub fn unknown_certificate_type(code: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self::UnknownCertificateType {
            code: code.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create an unknown certificate level error
    pub fn unknown_certificate_level(
        level: impl Into<String>,
        unique_id: impl Into<String>,
    ) -> Self {
        Self::UnknownCertificateLevel {
            level: level.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create an unknown rating error
    pub fn unknown_rating(rating: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self::UnknownRating {
            rating: rating.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create an unknown rating level error
    pub fn unknown_rating_level(level: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self::UnknownRatingLevel {
            level: level.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create an improperly formatted rating error
    pub fn invalid_rating(rating: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self::InvalidRating {
            rating: rating.into(),
            unique_id: unique_id.into(),
        }
    }

    /// Create a truncated record error
    pub fn truncated_record(
        unique_id: impl Into<String>,
        field: &'static str,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::TruncatedRecord {
            unique_id: unique_id.into(),
            field,
            expected,
            found,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a layout mismatch error
    pub fn layout_mismatch(layout: &'static str, message: impl Into<String>) -> Self {
        Self::LayoutMismatch {
            layout,
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a task join error
    pub fn task_join(message: impl Into<String>) -> Self {
        Self::TaskJoin {
            message: message.into(),
        }
    }

    /// True for errors raised while decoding or mapping a single record.
    ///
    /// These reject only the offending row; everything else is file-level or fatal.
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::CertificateTypeNotGiven { .. }
                | Self::LevelNotGiven { .. }
                | Self::ExpirationDateNotGiven { .. }
                | Self::MedicalWithoutDate { .. }
                | Self::UnknownMedicalClass { .. }
                | Self::UnknownCertificateType { .. }
                | Self::UnknownCertificateLevel { .. }
                | Self::UnknownRating { .. }
                | Self::UnknownRatingLevel { .. }
                | Self::InvalidRating { .. }
                | Self::TruncatedRecord { .. }
        )
    }

    /// The record identifier carried by a record-level error, if any
    pub fn unique_id(&self) -> Option<&str> {
        match self {
            Self::InvalidDate { unique_id, .. }
            | Self::CertificateTypeNotGiven { unique_id }
            | Self::LevelNotGiven { unique_id }
            | Self::ExpirationDateNotGiven { unique_id }
            | Self::MedicalWithoutDate { unique_id }
            | Self::UnknownMedicalClass { unique_id, .. }
            | Self::UnknownCertificateType { unique_id, .. }
            | Self::UnknownCertificateLevel { unique_id, .. }
            | Self::UnknownRating { unique_id, .. }
            | Self::UnknownRatingLevel { unique_id, .. }
            | Self::InvalidRating { unique_id, .. }
            | Self::TruncatedRecord { unique_id, .. } => Some(unique_id),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::TaskJoin {
            message: error.to_string(),
        }
    }
}
