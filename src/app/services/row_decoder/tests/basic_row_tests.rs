//! Tests for basic holder row decoding

use super::{date, decode_basic};
use crate::Error;
use crate::app::models::MedicalClass;
use crate::app::services::row_decoder::taxonomy::MedicalClassCode;

#[test]
fn test_complete_row() {
    let row = decode_basic(&[
        "A0000005", "CHARLIE", "BROWN", "789 PINE RD", "APT 5B", "CHICAGO", "IL", "60601", "USA",
        "GL", "2", "063024", "063026", "", "",
    ])
    .unwrap();

    assert_eq!(row.unique_id, "A0000005");
    assert_eq!(row.first_name.as_deref(), Some("CHARLIE"));
    assert_eq!(row.last_name.as_deref(), Some("BROWN"));
    assert_eq!(row.address.street_1.as_deref(), Some("789 PINE RD"));
    assert_eq!(row.address.street_2.as_deref(), Some("APT 5B"));
    assert_eq!(row.address.city.as_deref(), Some("CHICAGO"));
    assert_eq!(row.address.state.as_deref(), Some("IL"));
    assert_eq!(row.address.zip_code.as_deref(), Some("60601"));
    assert_eq!(row.address.country.as_deref(), Some("USA"));
    assert_eq!(row.address.region.as_deref(), Some("GL"));
    assert_eq!(
        row.medical_class,
        Some(MedicalClassCode::Faa(MedicalClass::Second))
    );
    assert_eq!(row.medical_date, Some(date(2024, 6, 30)));
    assert_eq!(row.medical_expiration_date, Some(date(2026, 6, 30)));
    assert_eq!(row.basic_med_course_date, None);
}

#[test]
fn test_class_eight_decodes_as_no_medical() {
    let row = decode_basic(&[
        "A0000001", "JOHN", "DOE", "123 MAIN ST", "", "SEATTLE", "WA", "98101", "USA", "WN",
        "8", "010124", "013126", "", "",
    ])
    .unwrap();
    assert_eq!(row.medical_class, Some(MedicalClassCode::NoMedical));
    assert_eq!(row.address.street_2, None);
}

#[test]
fn test_unknown_medical_class() {
    let result = decode_basic(&[
        "A0000009", "", "", "", "", "", "", "", "", "", "4", "010124", "", "", "",
    ]);
    match result {
        Err(Error::UnknownMedicalClass { class, unique_id }) => {
            assert_eq!(class, "4");
            assert_eq!(unique_id, "A0000009");
        }
        other => panic!("Expected unknown medical class, got {:?}", other),
    }
}

#[test]
fn test_invalid_medical_date() {
    let result = decode_basic(&[
        "A0000010", "", "", "", "", "", "", "", "", "", "1", "1/1/24", "", "", "",
    ]);
    let error = result.unwrap_err();
    assert!(error.is_record_error());
    assert_eq!(error.unique_id(), Some("A0000010"));
    match error {
        Error::InvalidDate { value, field, .. } => {
            assert_eq!(value, "1/1/24");
            assert_eq!(field, "MED DATE");
        }
        other => panic!("Expected invalid date, got {:?}", other),
    }
}

#[test]
fn test_trailing_empty_column_is_tolerated() {
    // The published files end every line with a comma
    let row = decode_basic(&[
        "A0000002", "JANE", "SMITH", "", "", "", "", "", "", "", "", "", "", "110122", "110124",
        "",
    ])
    .unwrap();
    assert_eq!(row.basic_med_course_date, Some(date(2022, 11, 1)));
    assert_eq!(row.basic_med_cmec_date, Some(date(2024, 11, 1)));
    assert!(row.address.is_empty());
}

#[test]
fn test_short_row_is_truncated() {
    let result = decode_basic(&["A0000011", "JANE", "SMITH", "1 ELM ST"]);
    match result {
        Err(Error::TruncatedRecord { field, found, .. }) => {
            assert_eq!(field, "STREET 2");
            assert_eq!(found, 4);
        }
        other => panic!("Expected truncated record, got {:?}", other),
    }
}

#[test]
fn test_invalid_basic_med_date_names_its_column() {
    let result = decode_basic(&[
        "A0000011", "", "", "", "", "", "", "", "", "", "", "", "", "110122", "13XX24",
    ]);
    match result {
        Err(Error::InvalidDate {
            value,
            field,
            unique_id,
        }) => {
            assert_eq!(value, "13XX24");
            assert_eq!(field, "BASIC MED CMEC DATE");
            assert_eq!(unique_id, "A0000011");
        }
        other => panic!("Expected invalid date, got {:?}", other),
    }
}
