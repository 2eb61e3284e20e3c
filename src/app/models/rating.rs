//! Certificate levels and ratings
//!
//! Variant order is significant: the derived `Ord` drives iteration order of
//! the rating sets, lowest level or category first.

use serde::{Deserialize, Serialize};

/// Pilot certificate levels, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PilotLevel {
    Student,
    Sport,
    Recreational,
    Private,
    Commercial,
    AirlineTransport,
}

/// Aircraft category and class for pilot ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PilotCategoryClass {
    AirplaneSingleEngineLand,
    AirplaneSingleEngineSea,
    AirplaneMultiEngineLand,
    AirplaneMultiEngineSea,
    Glider,
    RotorcraftHelicopter,
    RotorcraftGyroplane,
    LighterThanAirBalloon,
    LighterThanAirAirship,
    PoweredLift,
}

/// Aircraft category of an instrument rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstrumentCategory {
    Airplane,
    Helicopter,
    PoweredLift,
}

/// A rating on a pilot certificate
///
/// Category/class and type ratings carry the level they were earned at, which
/// may be lower than the level of the certificate itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PilotRating {
    CategoryClass {
        category_class: PilotCategoryClass,
        level: PilotLevel,
    },
    Instrument(InstrumentCategory),
    /// Type rating for an ICAO aircraft type designator
    Type { type_code: String, level: PilotLevel },
}

/// Aircraft category for flight instructor ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightInstructorCategory {
    AirplaneSingleEngine,
    AirplaneMultiEngine,
    Glider,
    RotorcraftHelicopter,
    RotorcraftGyroplane,
    PoweredLift,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightInstructorRating {
    Category(FlightInstructorCategory),
    Instrument(InstrumentCategory),
    Sport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlightEngineerRating {
    Reciprocating,
    Turboprop,
    Jet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MechanicRating {
    Airframe,
    Powerplant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroundInstructorRating {
    Basic,
    Advanced,
    Instrument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RepairmanLightSportRating {
    Maintenance,
    Inspection,
}

/// Parachute rigger levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiggerLevel {
    Senior,
    Master,
}

/// Parachute type ratings, each carrying the level it was earned at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiggerRating {
    Back(RiggerLevel),
    Chest(RiggerLevel),
    Seat(RiggerLevel),
    Lap(RiggerLevel),
}

impl RiggerRating {
    /// Level the rating was earned at
    pub fn level(&self) -> RiggerLevel {
        match *self {
            RiggerRating::Back(level)
            | RiggerRating::Chest(level)
            | RiggerRating::Seat(level)
            | RiggerRating::Lap(level) => level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_pilot_levels_are_ranked() {
        assert!(PilotLevel::Student < PilotLevel::Private);
        assert!(PilotLevel::Commercial < PilotLevel::AirlineTransport);
    }

    #[test]
    fn test_pilot_rating_ordering() {
        let ratings: BTreeSet<PilotRating> = [
            PilotRating::Type {
                type_code: "B737".into(),
                level: PilotLevel::AirlineTransport,
            },
            PilotRating::Instrument(InstrumentCategory::Airplane),
            PilotRating::CategoryClass {
                category_class: PilotCategoryClass::AirplaneMultiEngineLand,
                level: PilotLevel::Commercial,
            },
        ]
        .into_iter()
        .collect();

        let ordered: Vec<_> = ratings.into_iter().collect();
        assert!(matches!(ordered[0], PilotRating::CategoryClass { .. }));
        assert!(matches!(ordered[1], PilotRating::Instrument(_)));
        assert!(matches!(ordered[2], PilotRating::Type { .. }));
    }

    #[test]
    fn test_rigger_rating_level() {
        assert_eq!(RiggerRating::Seat(RiggerLevel::Master).level(), RiggerLevel::Master);
        assert_eq!(RiggerRating::Back(RiggerLevel::Senior).level(), RiggerLevel::Senior);
    }
}
