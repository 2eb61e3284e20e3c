//! Tests for the merge fold

use super::{holder, mechanic, pilot};
use crate::app::models::{Address, PilotLevel};
use crate::app::services::holder_database::{ContributionKey, HolderDatabase};

#[test]
fn test_later_first_name_fills_absent() {
    let database = HolderDatabase::new();
    database.append(ContributionKey::new(0, 2), holder("A1", None, Some("DOE")));
    database.append(ContributionKey::new(1, 2), holder("A1", Some("JOHN"), None));

    let holders = database.merge();
    let merged = &holders["A1"];
    assert_eq!(merged.first_name.as_deref(), Some("JOHN"));
    assert_eq!(merged.last_name.as_deref(), Some("DOE"));
}

#[test]
fn test_later_scalar_replaces_earlier() {
    let database = HolderDatabase::new();
    let mut earlier = holder("A1", Some("JON"), None);
    earlier.address = Some(Address {
        city: Some("SEATTLE".into()),
        ..Address::default()
    });
    let mut later = holder("A1", Some("JOHN"), None);
    later.address = Some(Address {
        city: Some("PORTLAND".into()),
        ..Address::default()
    });

    database.append(ContributionKey::new(0, 9), earlier);
    database.append(ContributionKey::new(0, 4), holder("A1", Some("J"), None));
    database.append(ContributionKey::new(2, 1), later);

    let holders = database.merge();
    let merged = &holders["A1"];
    assert_eq!(merged.first_name.as_deref(), Some("JOHN"));
    assert_eq!(
        merged.address.as_ref().and_then(|a| a.city.as_deref()),
        Some("PORTLAND")
    );
}

#[test]
fn test_fold_order_ignores_arrival_order() {
    let forward = HolderDatabase::new();
    let backward = HolderDatabase::new();
    let partials = [
        (ContributionKey::new(0, 2), holder("A1", Some("FIRST"), None)),
        (ContributionKey::new(1, 2), holder("A1", Some("SECOND"), None)),
        (ContributionKey::new(2, 2), holder("A1", Some("THIRD"), None)),
    ];

    forward.append_all(partials.clone());
    backward.append_all(partials.into_iter().rev());

    assert_eq!(forward.merge(), backward.merge());
    assert_eq!(forward.merge()["A1"].first_name.as_deref(), Some("THIRD"));
}

#[test]
fn test_certificates_deduplicated_in_first_seen_order() {
    let database = HolderDatabase::new();
    database.append(
        ContributionKey::new(2, 5),
        holder("A1", None, None).with_certificate(mechanic()),
    );
    database.append(
        ContributionKey::new(1, 3),
        holder("A1", None, None).with_certificate(pilot(PilotLevel::Private)),
    );
    database.append(
        ContributionKey::new(1, 8),
        holder("A1", None, None).with_certificate(pilot(PilotLevel::Private)),
    );
    database.append(
        ContributionKey::new(1, 9),
        holder("A1", None, None).with_certificate(pilot(PilotLevel::Commercial)),
    );

    let holders = database.merge();
    let merged = &holders["A1"];
    assert_eq!(
        merged.certificates,
        vec![
            pilot(PilotLevel::Private),
            pilot(PilotLevel::Commercial),
            mechanic(),
        ]
    );
}

#[test]
fn test_distinct_identifiers_stay_apart() {
    let database = HolderDatabase::new();
    database.append(ContributionKey::new(0, 2), holder("A1", Some("JOHN"), None));
    database.append(ContributionKey::new(0, 3), holder("A2", Some("JANE"), None));

    let holders = database.merge();
    assert_eq!(holders.len(), 2);
    assert_eq!(holders["A2"].first_name.as_deref(), Some("JANE"));
}
