//! Field coercion utilities for registry records
//!
//! This module provides helper functions for reading positional fields from CSV
//! records: trimming, empty-to-absent coercion, compact dates and the
//! two-part rating grammar.

use super::column_layout::ColumnLayout;
use super::taxonomy;
use crate::app::models::CertificateKind;
use crate::constants::{RATING_SEPARATOR, TWO_DIGIT_YEAR_PIVOT, columns};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use std::ops::Range;

/// Get an optional field value from a CSV record
///
/// Missing positions and whitespace-only values are both absent.
pub fn get_optional_field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Get an optional field value as an owned string
pub fn get_optional_string(record: &StringRecord, index: usize) -> Option<String> {
    get_optional_field(record, index).map(str::to_string)
}

/// Get the record identifier
///
/// The identifier is assigned upstream and taken as-is, trimmed.
pub fn get_unique_id(record: &StringRecord) -> String {
    record
        .get(columns::UNIQUE_ID)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Parse a compact `MMDDYY` or `MMDDYYYY` date
///
/// Returns `None` for anything that is not a real calendar date in either form.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !(value.len() == 6 || value.len() == 8) || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = value[0..2].parse().ok()?;
    let day: u32 = value[2..4].parse().ok()?;
    let year: i32 = if value.len() == 6 {
        let short: i32 = value[4..6].parse().ok()?;
        if short >= TWO_DIGIT_YEAR_PIVOT {
            1900 + short
        } else {
            2000 + short
        }
    } else {
        value[4..8].parse().ok()?
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse an optional date column; blank is absent, malformed is an error
/// naming the column and the record
pub fn parse_optional_date(
    record: &StringRecord,
    layout: &ColumnLayout,
    index: usize,
    unique_id: &str,
) -> Result<Option<NaiveDate>> {
    get_optional_field(record, index)
        .map(|value| {
            parse_date(value)
                .ok_or_else(|| Error::invalid_date(value, layout.column_name(index), unique_id))
        })
        .transpose()
}

/// Non-blank rating fields within a column window
pub fn rating_fields(record: &StringRecord, window: Range<usize>) -> impl Iterator<Item = &str> {
    window.filter_map(move |index| get_optional_field(record, index))
}

/// Split a `<sublevel>/<code>` rating into its two parts
pub fn split_rating<'a>(raw: &'a str, unique_id: &str) -> Result<(&'a str, &'a str)> {
    let mut parts = raw.split(RATING_SEPARATOR).filter(|part| !part.is_empty());
    match (parts.next(), parts.next(), parts.next()) {
        (Some(sublevel), Some(code), None) => Ok((sublevel, code)),
        _ => Err(Error::invalid_rating(raw, unique_id)),
    }
}

/// Split a rating whose left part must be the certificate's own type code
pub fn split_tagged_rating<'a>(
    raw: &'a str,
    kind: CertificateKind,
    unique_id: &str,
) -> Result<&'a str> {
    let (tag, code) = split_rating(raw, unique_id)?;
    if tag != kind.code() {
        return Err(Error::unknown_rating_level(tag, unique_id));
    }
    Ok(code)
}

/// Decode ratings tagged with the certificate's type code against one table
pub fn tagged_ratings<'a, T: Copy>(
    ratings: impl Iterator<Item = &'a str>,
    kind: CertificateKind,
    table: &[(&str, T)],
    unique_id: &str,
) -> Result<Vec<T>> {
    ratings
        .map(|raw| -> Result<T> {
            let code = split_tagged_rating(raw, kind, unique_id)?;
            taxonomy::lookup(table, code).ok_or_else(|| Error::unknown_rating(code, unique_id))
        })
        .collect()
}

/// Fail on the first rating of a kind that carries none
pub fn reject_ratings<'a>(
    mut ratings: impl Iterator<Item = &'a str>,
    unique_id: &str,
) -> Result<()> {
    match ratings.next() {
        Some(raw) => Err(Error::unknown_rating(raw, unique_id)),
        None => Ok(()),
    }
}

/// True when every field of the record is blank
pub fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
