//! Application constants for the airmen registry parser
//!
//! This module contains the file names, column positions, default values and
//! date conventions used throughout the parser.

// =============================================================================
// Distribution File Names
// =============================================================================

/// Basic holder file for pilots (names, addresses, medical state)
pub const PILOT_BASIC_FILE: &str = "PILOT_BASIC.csv";

/// Basic holder file for non-pilot airmen
pub const NONPILOT_BASIC_FILE: &str = "NONPILOT_BASIC.csv";

/// Certificate file for pilot-type certificates
pub const PILOT_CERT_FILE: &str = "PILOT_CERT.csv";

/// Certificate file for non-pilot certificates
pub const NONPILOT_CERT_FILE: &str = "NONPILOT_CERT.csv";

// =============================================================================
// Column Positions
// =============================================================================

/// Column positions shared by every file
pub mod columns {
    pub const UNIQUE_ID: usize = 0;
    pub const FIRST_NAME: usize = 1;
    pub const LAST_NAME: usize = 2;
}

/// Column positions in the basic holder files
pub mod basic_columns {
    pub const STREET_1: usize = 3;
    pub const STREET_2: usize = 4;
    pub const CITY: usize = 5;
    pub const STATE: usize = 6;
    pub const ZIP_CODE: usize = 7;
    pub const COUNTRY: usize = 8;
    pub const REGION: usize = 9;
    pub const MEDICAL_CLASS: usize = 10;
    pub const MEDICAL_DATE: usize = 11;
    pub const MEDICAL_EXPIRATION_DATE: usize = 12;
    pub const BASIC_MED_COURSE_DATE: usize = 13;
    pub const BASIC_MED_CMEC_DATE: usize = 14;
}

/// Column positions in the certificate files
pub mod cert_columns {
    pub const TYPE: usize = 3;
    pub const LEVEL: usize = 4;
    pub const EXPIRATION_DATE: usize = 5;

    /// First rating column
    pub const RATINGS_START: usize = 6;

    /// Rating columns in the pilot certificate file before the type rating tail
    pub const PILOT_RATING_COUNT: usize = 11;

    /// First type rating column in the pilot certificate file
    pub const TYPE_RATINGS_START: usize = RATINGS_START + PILOT_RATING_COUNT;
}

// =============================================================================
// Field Encodings
// =============================================================================

/// Separator between the sub-level and code parts of a rating
pub const RATING_SEPARATOR: char = '/';

/// Medical class code meaning "no FAA medical on file"
pub const NO_MEDICAL_CLASS: &str = "8";

/// Two-digit years at or above this pivot fall in the 1900s, below it in the 2000s
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of files scanned at once (one per file in the distribution)
pub const DEFAULT_MAX_CONCURRENT_FILES: usize = 4;

/// Default number of records handed to a worker as one unit of work
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default number of queued chunks per file before the reader waits
pub const DEFAULT_QUEUE_DEPTH: usize = 8;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "AIRMEN_";
