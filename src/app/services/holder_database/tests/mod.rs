//! Test utilities for holder database testing

use crate::app::models::{Certificate, Holder, MechanicRating, PilotLevel};
use std::collections::BTreeSet;

mod merge_tests;

pub fn holder(id: &str, first_name: Option<&str>, last_name: Option<&str>) -> Holder {
    Holder::new(id).with_name(first_name.map(String::from), last_name.map(String::from))
}

pub fn pilot(level: PilotLevel) -> Certificate {
    Certificate::Pilot {
        level,
        ratings: BTreeSet::new(),
        centerline_thrust_only: false,
    }
}

pub fn mechanic() -> Certificate {
    Certificate::Mechanic {
        ratings: BTreeSet::from([MechanicRating::Airframe, MechanicRating::Powerplant]),
    }
}
