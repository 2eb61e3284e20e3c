//! Test utilities for entity mapper testing

use crate::Result;
use crate::app::models::Holder;
use crate::app::services::entity_mapper::map_row;
use crate::app::services::row_decoder::{RowDecoder, RowKind};
use chrono::NaiveDate;

mod non_pilot_tests;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Decode and map one raw record of the given kind
pub fn map_fields(kind: RowKind, fields: &[&str]) -> Result<Holder> {
    let row = RowDecoder::new(kind)?
        .decode_fields(fields)?
        .expect("test record should not be blank");
    map_row(row)
}

/// Basic holder record with the medical columns filled in
pub fn basic_fields<'a>(id: &'a str, medical: [&'a str; 5]) -> Vec<&'a str> {
    let mut fields = vec![id, "JOHN", "DOE", "", "", "", "", "", "", ""];
    fields.extend(medical);
    fields
}
