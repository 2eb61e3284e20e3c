//! Decoder for the basic holder files (`PILOT_BASIC.csv`, `NONPILOT_BASIC.csv`)

use super::column_layout::ColumnLayout;
use super::field_parsers::{get_optional_string, get_unique_id, parse_optional_date};
use super::taxonomy::{self, MedicalClassCode};
use crate::app::models::Address;
use crate::constants::{basic_columns, columns};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;

/// One decoded row of a basic holder file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicRow {
    pub unique_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Address as published; may be empty
    pub address: Address,
    pub medical_class: Option<MedicalClassCode>,
    pub medical_date: Option<NaiveDate>,
    pub medical_expiration_date: Option<NaiveDate>,
    pub basic_med_course_date: Option<NaiveDate>,
    pub basic_med_cmec_date: Option<NaiveDate>,
}

/// Decode a basic holder record
pub fn decode_basic_row(record: &StringRecord, layout: &ColumnLayout) -> Result<BasicRow> {
    let unique_id = get_unique_id(record);
    layout.check_width(record, &unique_id)?;

    let address = Address {
        street_1: get_optional_string(record, basic_columns::STREET_1),
        street_2: get_optional_string(record, basic_columns::STREET_2),
        city: get_optional_string(record, basic_columns::CITY),
        state: get_optional_string(record, basic_columns::STATE),
        zip_code: get_optional_string(record, basic_columns::ZIP_CODE),
        country: get_optional_string(record, basic_columns::COUNTRY),
        region: get_optional_string(record, basic_columns::REGION),
    };

    let medical_class = match get_optional_string(record, basic_columns::MEDICAL_CLASS) {
        Some(code) => Some(
            taxonomy::lookup(taxonomy::MEDICAL_CLASSES, &code)
                .ok_or_else(|| Error::unknown_medical_class(&code, &unique_id))?,
        ),
        None => None,
    };

    let date = |index| parse_optional_date(record, layout, index, &unique_id);

    Ok(BasicRow {
        first_name: get_optional_string(record, columns::FIRST_NAME),
        last_name: get_optional_string(record, columns::LAST_NAME),
        address,
        medical_class,
        medical_date: date(basic_columns::MEDICAL_DATE)?,
        medical_expiration_date: date(basic_columns::MEDICAL_EXPIRATION_DATE)?,
        basic_med_course_date: date(basic_columns::BASIC_MED_COURSE_DATE)?,
        basic_med_cmec_date: date(basic_columns::BASIC_MED_CMEC_DATE)?,
        unique_id,
    })
}
