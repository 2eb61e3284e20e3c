//! Positional column layouts for each row kind
//!
//! A layout is an ordered table of the fixed columns a row kind must carry,
//! plus the window of variable-count rating columns that follow them. Layouts
//! are validated once when a parser is built, and each file header is checked
//! against its layout before any record is decoded.

use crate::constants::{basic_columns, cert_columns, columns};
use crate::{Error, Result};
use csv::StringRecord;
use std::ops::Range;

/// The three row shapes found in the distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Basic,
    PilotCert,
    NonPilotCert,
}

/// A run of rating columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingWindow {
    /// First column of the window
    pub start: usize,
    /// Number of columns, or `None` when the window runs to the end of the record
    pub max_count: Option<usize>,
}

impl RatingWindow {
    /// Column range covered by this window in a record of `record_len` fields
    pub fn range(&self, record_len: usize) -> Range<usize> {
        let end = match self.max_count {
            Some(count) => (self.start + count).min(record_len),
            None => record_len,
        };
        self.start.min(end)..end
    }
}

/// Ordered index-to-column table for one row kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub kind: RowKind,
    pub name: &'static str,
    /// Fixed columns as `(index, name)`, in position order
    pub columns: &'static [(usize, &'static str)],
    /// Rating code columns
    pub ratings: Option<RatingWindow>,
    /// Pilot type rating columns (unbounded tail)
    pub type_ratings: Option<RatingWindow>,
}

const BASIC_COLUMNS: &[(usize, &str)] = &[
    (columns::UNIQUE_ID, "UNIQUE ID"),
    (columns::FIRST_NAME, "FIRST NAME"),
    (columns::LAST_NAME, "LAST NAME"),
    (basic_columns::STREET_1, "STREET 1"),
    (basic_columns::STREET_2, "STREET 2"),
    (basic_columns::CITY, "CITY"),
    (basic_columns::STATE, "STATE"),
    (basic_columns::ZIP_CODE, "ZIP CODE"),
    (basic_columns::COUNTRY, "COUNTRY"),
    (basic_columns::REGION, "REGION"),
    (basic_columns::MEDICAL_CLASS, "MED CLASS"),
    (basic_columns::MEDICAL_DATE, "MED DATE"),
    (basic_columns::MEDICAL_EXPIRATION_DATE, "MED EXP DATE"),
    (basic_columns::BASIC_MED_COURSE_DATE, "BASIC MED COURSE DATE"),
    (basic_columns::BASIC_MED_CMEC_DATE, "BASIC MED CMEC DATE"),
];

const CERT_COLUMNS: &[(usize, &str)] = &[
    (columns::UNIQUE_ID, "UNIQUE ID"),
    (columns::FIRST_NAME, "FIRST NAME"),
    (columns::LAST_NAME, "LAST NAME"),
    (cert_columns::TYPE, "TYPE"),
    (cert_columns::LEVEL, "LEVEL"),
    (cert_columns::EXPIRATION_DATE, "EXPIRE DATE"),
];

impl ColumnLayout {
    pub const BASIC: ColumnLayout = ColumnLayout {
        kind: RowKind::Basic,
        name: "basic",
        columns: BASIC_COLUMNS,
        ratings: None,
        type_ratings: None,
    };

    pub const PILOT_CERT: ColumnLayout = ColumnLayout {
        kind: RowKind::PilotCert,
        name: "pilot certificate",
        columns: CERT_COLUMNS,
        ratings: Some(RatingWindow {
            start: cert_columns::RATINGS_START,
            max_count: Some(cert_columns::PILOT_RATING_COUNT),
        }),
        type_ratings: Some(RatingWindow {
            start: cert_columns::TYPE_RATINGS_START,
            max_count: None,
        }),
    };

    pub const NON_PILOT_CERT: ColumnLayout = ColumnLayout {
        kind: RowKind::NonPilotCert,
        name: "non-pilot certificate",
        columns: CERT_COLUMNS,
        ratings: Some(RatingWindow {
            start: cert_columns::RATINGS_START,
            max_count: None,
        }),
        type_ratings: None,
    };

    /// Get the layout for a row kind
    pub fn for_kind(kind: RowKind) -> &'static ColumnLayout {
        match kind {
            RowKind::Basic => &Self::BASIC,
            RowKind::PilotCert => &Self::PILOT_CERT,
            RowKind::NonPilotCert => &Self::NON_PILOT_CERT,
        }
    }

    /// Number of fixed columns every record must carry
    pub fn fixed_width(&self) -> usize {
        self.columns.len()
    }

    /// Get the index for a given column name
    pub fn index_of(&self, column_name: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(_, name)| *name == column_name)
            .map(|(index, _)| *index)
    }

    /// Name of the fixed column at `index`, or `"UNKNOWN"` past the fixed columns
    pub fn column_name(&self, index: usize) -> &'static str {
        self.columns
            .get(index)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }

    /// Rating columns present in a record of `record_len` fields
    pub fn rating_range(&self, record_len: usize) -> Range<usize> {
        self.ratings
            .map(|window| window.range(record_len))
            .unwrap_or(0..0)
    }

    /// Type rating columns present in a record of `record_len` fields
    pub fn type_rating_range(&self, record_len: usize) -> Range<usize> {
        self.type_ratings
            .map(|window| window.range(record_len))
            .unwrap_or(0..0)
    }

    /// Check the table shape: positions contiguous from zero, unique names, and
    /// rating windows that follow the fixed columns without overlap
    pub fn validate(&self) -> Result<()> {
        for (position, (index, name)) in self.columns.iter().enumerate() {
            if *index != position {
                return Err(Error::layout_mismatch(
                    self.name,
                    format!(
                        "column '{}' is at index {}, expected {}",
                        name, index, position
                    ),
                ));
            }
            if self.columns[..position].iter().any(|(_, other)| other == name) {
                return Err(Error::layout_mismatch(
                    self.name,
                    format!("column '{}' appears more than once", name),
                ));
            }
        }

        let mut next_free = self.fixed_width();
        for window in [self.ratings, self.type_ratings].into_iter().flatten() {
            if window.start != next_free {
                return Err(Error::layout_mismatch(
                    self.name,
                    format!(
                        "rating window starts at {}, expected {}",
                        window.start, next_free
                    ),
                ));
            }
            match window.max_count {
                Some(count) => next_free = window.start + count,
                // An unbounded window must be the last one
                None => next_free = usize::MAX,
            }
        }

        Ok(())
    }

    /// Check a file header against the fixed columns
    pub fn check_header(&self, header: &StringRecord) -> Result<()> {
        if header.len() < self.fixed_width() {
            return Err(Error::layout_mismatch(
                self.name,
                format!(
                    "header has {} columns, expected at least {}",
                    header.len(),
                    self.fixed_width()
                ),
            ));
        }
        Ok(())
    }

    /// Check that a record carries every fixed column
    pub fn check_width(&self, record: &StringRecord, unique_id: &str) -> Result<()> {
        let found = record.len();
        if found < self.fixed_width() {
            let missing = self.columns[found].1;
            return Err(Error::truncated_record(
                unique_id,
                missing,
                self.fixed_width(),
                found,
            ));
        }
        Ok(())
    }
}
