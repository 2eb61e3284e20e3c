//! Tests for non-pilot certificate mapping

use super::map_fields;
use crate::Error;
use crate::app::models::{Certificate, MechanicRating, RiggerLevel, RiggerRating};
use crate::app::services::row_decoder::RowKind;
use std::collections::BTreeSet;

#[test]
fn test_mechanic() {
    let holder = map_fields(
        RowKind::NonPilotCert,
        &["A0000001", "FRANK", "HARRIS", "M", "", "", "M/A", "M/P", "M/AIRFR"],
    )
    .unwrap();

    assert_eq!(holder.first_name.as_deref(), Some("FRANK"));
    assert_eq!(holder.address, None);
    assert_eq!(
        holder.certificates,
        vec![Certificate::Mechanic {
            ratings: BTreeSet::from([MechanicRating::Airframe, MechanicRating::Powerplant]),
        }]
    );
}

#[test]
fn test_rigger_keeps_rating_levels() {
    let holder = map_fields(
        RowKind::NonPilotCert,
        &["A0000002", "GRACE", "CLARK", "W", "M", "", "M/B", "S/S"],
    )
    .unwrap();

    assert_eq!(
        holder.certificates,
        vec![Certificate::Rigger {
            level: RiggerLevel::Master,
            ratings: BTreeSet::from([
                RiggerRating::Back(RiggerLevel::Master),
                RiggerRating::Seat(RiggerLevel::Senior),
            ]),
        }]
    );
}

#[test]
fn test_rigger_requires_level() {
    assert!(matches!(
        map_fields(RowKind::NonPilotCert, &["A0000003", "", "", "W", "", "", "M/B"]),
        Err(Error::LevelNotGiven { .. })
    ));
}

#[test]
fn test_ratingless_certificates() {
    let holder = map_fields(RowKind::NonPilotCert, &["A0000004", "", "", "D", "", ""]).unwrap();
    assert_eq!(holder.certificates, vec![Certificate::Dispatcher]);
    assert_eq!(holder.medical, None);
}
