//! Row decoding for the airmen registry CSV files
//!
//! This module turns one positional CSV record into a typed row, validating the
//! certificate, level and rating taxonomies embedded in the registry's short
//! codes. Decoding never consults other rows; every failure is a per-record
//! error carrying the offending raw value and the record identifier.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Trimming, empty-to-absent coercion, dates and rating grammar
//! - [`taxonomy`] - Closed code tables for types, levels and ratings
//! - [`column_layout`] - Fixed column tables and rating windows per row kind
//! - [`basic_row`], [`pilot_cert_row`], [`non_pilot_cert_row`] - One decoder per file kind
//!
//! ## Usage
//!
//! ```rust
//! use airmen_registry::app::services::row_decoder::{DecodedRow, RowDecoder, RowKind};
//! use csv::StringRecord;
//!
//! # fn example() -> airmen_registry::Result<()> {
//! let decoder = RowDecoder::new(RowKind::NonPilotCert)?;
//! let record = StringRecord::from(vec!["A0000001", "FRANK", "HARRIS", "M", "", "", "M/A", "M/P"]);
//!
//! if let Some(DecodedRow::NonPilotCert(row)) = decoder.decode(&record)? {
//!     assert_eq!(row.unique_id, "A0000001");
//! }
//! # Ok(())
//! # }
//! ```

pub mod basic_row;
pub mod column_layout;
pub mod field_parsers;
pub mod non_pilot_cert_row;
pub mod pilot_cert_row;
pub mod taxonomy;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use basic_row::BasicRow;
pub use column_layout::{ColumnLayout, RatingWindow, RowKind};
pub use non_pilot_cert_row::{NonPilotCertBody, NonPilotCertRow};
pub use pilot_cert_row::{PilotCertBody, PilotCertRow};

use crate::Result;
use csv::StringRecord;

/// A decoded row of any file kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedRow {
    Basic(BasicRow),
    PilotCert(PilotCertRow),
    NonPilotCert(NonPilotCertRow),
}

impl DecodedRow {
    /// Identifier of the record the row was decoded from
    pub fn unique_id(&self) -> &str {
        match self {
            DecodedRow::Basic(row) => &row.unique_id,
            DecodedRow::PilotCert(row) => &row.unique_id,
            DecodedRow::NonPilotCert(row) => &row.unique_id,
        }
    }
}

/// Decoder for one row kind, bound to its validated column layout
#[derive(Debug, Clone, Copy)]
pub struct RowDecoder {
    layout: &'static ColumnLayout,
}

impl RowDecoder {
    /// Create a decoder, validating the layout and code tables up front
    pub fn new(kind: RowKind) -> Result<Self> {
        let layout = ColumnLayout::for_kind(kind);
        layout.validate()?;
        taxonomy::validate_tables()?;
        Ok(Self { layout })
    }

    pub fn kind(&self) -> RowKind {
        self.layout.kind
    }

    pub fn layout(&self) -> &'static ColumnLayout {
        self.layout
    }

    /// Decode one record; blank records decode to `None`
    pub fn decode(&self, record: &StringRecord) -> Result<Option<DecodedRow>> {
        if field_parsers::is_blank_record(record) {
            return Ok(None);
        }

        let row = match self.layout.kind {
            RowKind::Basic => DecodedRow::Basic(basic_row::decode_basic_row(record, self.layout)?),
            RowKind::PilotCert => DecodedRow::PilotCert(pilot_cert_row::decode_pilot_cert_row(
                record,
                self.layout,
            )?),
            RowKind::NonPilotCert => DecodedRow::NonPilotCert(
                non_pilot_cert_row::decode_non_pilot_cert_row(record, self.layout)?,
            ),
        };
        Ok(Some(row))
    }

    /// Decode a record given as a slice of raw fields
    pub fn decode_fields(&self, fields: &[&str]) -> Result<Option<DecodedRow>> {
        self.decode(&StringRecord::from(fields.to_vec()))
    }
}
