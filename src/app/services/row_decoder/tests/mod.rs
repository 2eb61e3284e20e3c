//! Test utilities for row decoder testing
//!
//! This module provides helpers that build raw records in the registry's column
//! order and decode them with a freshly validated decoder.

use super::{BasicRow, DecodedRow, NonPilotCertRow, PilotCertRow, RowDecoder, RowKind};
use crate::Result;
use chrono::NaiveDate;

// Test modules
mod basic_row_tests;
mod column_layout_tests;

/// Helper to build a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Helper to decode a basic holder record
pub fn decode_basic(fields: &[&str]) -> Result<BasicRow> {
    match RowDecoder::new(RowKind::Basic)?.decode_fields(fields)? {
        Some(DecodedRow::Basic(row)) => Ok(row),
        other => panic!("Expected basic row, got {:?}", other),
    }
}

/// Helper to decode a pilot certificate record
pub fn decode_pilot(fields: &[&str]) -> Result<PilotCertRow> {
    match RowDecoder::new(RowKind::PilotCert)?.decode_fields(fields)? {
        Some(DecodedRow::PilotCert(row)) => Ok(row),
        other => panic!("Expected pilot certificate row, got {:?}", other),
    }
}

/// Helper to decode a non-pilot certificate record
pub fn decode_non_pilot(fields: &[&str]) -> Result<NonPilotCertRow> {
    match RowDecoder::new(RowKind::NonPilotCert)?.decode_fields(fields)? {
        Some(DecodedRow::NonPilotCert(row)) => Ok(row),
        other => panic!("Expected non-pilot certificate row, got {:?}", other),
    }
}

/// Helper to lay out a pilot certificate record: six fixed fields, eleven
/// rating columns and the type rating tail
pub fn pilot_fields<'a>(
    head: [&'a str; 6],
    ratings: &[&'a str],
    type_ratings: &[&'a str],
) -> Vec<&'a str> {
    let mut fields = head.to_vec();
    let mut rating_columns = vec![""; 11];
    for (slot, rating) in rating_columns.iter_mut().zip(ratings) {
        *slot = *rating;
    }
    fields.extend(rating_columns);
    fields.extend(type_ratings);
    fields
}
