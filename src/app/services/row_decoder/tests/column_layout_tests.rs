//! Tests for column layout validation

use crate::Error;
use crate::app::services::row_decoder::column_layout::{ColumnLayout, RatingWindow, RowKind};
use csv::StringRecord;

#[test]
fn test_builtin_layouts_validate() {
    for kind in [RowKind::Basic, RowKind::PilotCert, RowKind::NonPilotCert] {
        let layout = ColumnLayout::for_kind(kind);
        assert!(layout.validate().is_ok(), "{} layout", layout.name);
        assert_eq!(layout.kind, kind);
    }
    assert_eq!(ColumnLayout::BASIC.fixed_width(), 15);
    assert_eq!(ColumnLayout::PILOT_CERT.fixed_width(), 6);
    assert_eq!(ColumnLayout::BASIC.index_of("MED CLASS"), Some(10));
    assert_eq!(ColumnLayout::BASIC.index_of("TYPE"), None);
}

#[test]
fn test_validate_rejects_gaps() {
    const GAPPED: &[(usize, &str)] = &[(0, "UNIQUE ID"), (2, "LAST NAME")];
    let layout = ColumnLayout {
        columns: GAPPED,
        ..ColumnLayout::BASIC
    };
    match layout.validate() {
        Err(Error::LayoutMismatch { layout, .. }) => assert_eq!(layout, "basic"),
        other => panic!("Expected layout mismatch, got {:?}", other),
    }
}

#[test]
fn test_validate_rejects_duplicate_names() {
    const DUPLICATED: &[(usize, &str)] = &[(0, "UNIQUE ID"), (1, "UNIQUE ID")];
    let layout = ColumnLayout {
        columns: DUPLICATED,
        ..ColumnLayout::BASIC
    };
    assert!(matches!(layout.validate(), Err(Error::LayoutMismatch { .. })));
}

#[test]
fn test_validate_rejects_misplaced_windows() {
    let overlapping = ColumnLayout {
        ratings: Some(RatingWindow {
            start: 4,
            max_count: Some(2),
        }),
        ..ColumnLayout::NON_PILOT_CERT
    };
    assert!(matches!(overlapping.validate(), Err(Error::LayoutMismatch { .. })));

    let after_unbounded = ColumnLayout {
        ratings: Some(RatingWindow {
            start: 6,
            max_count: None,
        }),
        ..ColumnLayout::PILOT_CERT
    };
    assert!(matches!(after_unbounded.validate(), Err(Error::LayoutMismatch { .. })));
}

#[test]
fn test_rating_ranges_clip_to_record() {
    let layout = &ColumnLayout::PILOT_CERT;
    assert_eq!(layout.rating_range(20), 6..17);
    assert_eq!(layout.type_rating_range(20), 17..20);
    assert_eq!(layout.rating_range(9), 6..9);
    assert_eq!(layout.type_rating_range(9), 9..9);
    assert_eq!(ColumnLayout::NON_PILOT_CERT.rating_range(40), 6..40);
    assert_eq!(ColumnLayout::BASIC.rating_range(15), 0..0);
}

#[test]
fn test_header_check() {
    let layout = &ColumnLayout::NON_PILOT_CERT;
    let header = StringRecord::from(vec![
        "UNIQUE ID", "FIRST NAME", "LAST NAME", "TYPE", "LEVEL", "EXPIRE DATE", "RATING1",
    ]);
    assert!(layout.check_header(&header).is_ok());

    let narrow = StringRecord::from(vec!["UNIQUE ID", "FIRST NAME"]);
    assert!(matches!(
        layout.check_header(&narrow),
        Err(Error::LayoutMismatch { .. })
    ));
}

#[test]
fn test_truncated_record() {
    let record = StringRecord::from(vec!["A0000001", "JOHN", "DOE", "P"]);
    match ColumnLayout::PILOT_CERT.check_width(&record, "A0000001") {
        Err(Error::TruncatedRecord {
            unique_id,
            field,
            expected,
            found,
        }) => {
            assert_eq!(unique_id, "A0000001");
            assert_eq!(field, "LEVEL");
            assert_eq!(expected, 6);
            assert_eq!(found, 4);
        }
        other => panic!("Expected truncated record, got {:?}", other),
    }
}
