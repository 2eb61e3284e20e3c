//! Closed code tables for the registry's short codes
//!
//! Each table maps the textual code found in one field role to its domain
//! concept. Tables accept both the long codes of the original distribution and
//! the short aliases used by later editions.

use crate::app::models::{
    CertificateKind, FlightEngineerRating, GroundInstructorRating, MechanicRating, MedicalClass,
    PilotLevel, RepairmanLightSportRating, RiggerLevel, RiggerRating,
};
use crate::constants::NO_MEDICAL_CLASS;

/// Medical class column values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedicalClassCode {
    Faa(MedicalClass),
    /// Code 8: no medical on file
    NoMedical,
}

/// Pilot rating codes as they appear after the level part
///
/// Several codes expand to more than one rating on the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PilotRatingCode {
    AirplaneSingleEngineLand,
    AirplaneSingleEngineSea,
    AirplaneMultiEngineLand,
    AirplaneMultiEngineSea,
    Glider,
    RotorcraftHelicopter,
    InstrumentAirplane,
    InstrumentAirplaneHelicopter,
    InstrumentHelicopter,
    RotorcraftGyroplane,
    LighterThanAirBalloon,
    AirplaneMultiEngineLandCenterlineThrust,
    LighterThanAirAirship,
    RotorcraftHelicopterGyroplane,
    PoweredLift,
    InstrumentPoweredLift,
    Sport,
}

/// Flight instructor rating codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightInstructorRatingCode {
    AirplaneSingleEngine,
    InstrumentAirplane,
    AirplaneSingleMultiEngine,
    RotorcraftHelicopter,
    Glider,
    Sport,
    RotorcraftGyroplane,
    InstrumentAirplaneHelicopter,
    InstrumentHelicopter,
    AirplaneMultiEngine,
    RotorcraftHelicopterGyroplane,
    PoweredLift,
    InstrumentPoweredLift,
}

/// Certificate kinds published in the pilot certificate file
pub const PILOT_FILE_KINDS: &[CertificateKind] = &[
    CertificateKind::Pilot,
    CertificateKind::FlightInstructor,
    CertificateKind::AuthorizedAircraftInstructor,
    CertificateKind::RemotePilot,
    CertificateKind::FlightEngineer,
    CertificateKind::FlightEngineerLessee,
    CertificateKind::FlightEngineerForeign,
];

/// Certificate kinds published in the non-pilot certificate file
pub const NON_PILOT_FILE_KINDS: &[CertificateKind] = &[
    CertificateKind::GroundInstructor,
    CertificateKind::Mechanic,
    CertificateKind::ControlTowerOperator,
    CertificateKind::Repairman,
    CertificateKind::RepairmanExperimental,
    CertificateKind::RepairmanLightSport,
    CertificateKind::Rigger,
    CertificateKind::Dispatcher,
    CertificateKind::Navigator,
    CertificateKind::NavigatorLessee,
];

pub const MEDICAL_CLASSES: &[(&str, MedicalClassCode)] = &[
    ("1", MedicalClassCode::Faa(MedicalClass::First)),
    ("2", MedicalClassCode::Faa(MedicalClass::Second)),
    ("3", MedicalClassCode::Faa(MedicalClass::Third)),
    (NO_MEDICAL_CLASS, MedicalClassCode::NoMedical),
];

pub const PILOT_LEVELS: &[(&str, PilotLevel)] = &[
    ("A", PilotLevel::AirlineTransport),
    ("C", PilotLevel::Commercial),
    ("P", PilotLevel::Private),
    ("V", PilotLevel::Recreational),
    ("T", PilotLevel::Sport),
    ("S", PilotLevel::Student),
];

pub const RIGGER_LEVELS: &[(&str, RiggerLevel)] = &[
    ("U", RiggerLevel::Master),
    ("W", RiggerLevel::Senior),
    ("M", RiggerLevel::Master),
    ("S", RiggerLevel::Senior),
];

pub const PILOT_RATINGS: &[(&str, PilotRatingCode)] = &[
    ("ASEL", PilotRatingCode::AirplaneSingleEngineLand),
    ("ASES", PilotRatingCode::AirplaneSingleEngineSea),
    ("AMEL", PilotRatingCode::AirplaneMultiEngineLand),
    ("AMES", PilotRatingCode::AirplaneMultiEngineSea),
    ("GL", PilotRatingCode::Glider),
    ("HEL", PilotRatingCode::RotorcraftHelicopter),
    ("INSTA", PilotRatingCode::InstrumentAirplane),
    ("INSTI", PilotRatingCode::InstrumentAirplaneHelicopter),
    ("INSTH", PilotRatingCode::InstrumentHelicopter),
    ("GYRO", PilotRatingCode::RotorcraftGyroplane),
    ("BAL", PilotRatingCode::LighterThanAirBalloon),
    ("AMELC", PilotRatingCode::AirplaneMultiEngineLandCenterlineThrust),
    ("AIR", PilotRatingCode::LighterThanAirAirship),
    ("HELGY", PilotRatingCode::RotorcraftHelicopterGyroplane),
    ("PLIFT", PilotRatingCode::PoweredLift),
    ("INSTP", PilotRatingCode::InstrumentPoweredLift),
    ("SPORT", PilotRatingCode::Sport),
];

pub const FLIGHT_INSTRUCTOR_RATINGS: &[(&str, FlightInstructorRatingCode)] = &[
    ("ASE", FlightInstructorRatingCode::AirplaneSingleEngine),
    ("INSTA", FlightInstructorRatingCode::InstrumentAirplane),
    ("ASME", FlightInstructorRatingCode::AirplaneSingleMultiEngine),
    ("HEL", FlightInstructorRatingCode::RotorcraftHelicopter),
    ("GL", FlightInstructorRatingCode::Glider),
    ("SPORT", FlightInstructorRatingCode::Sport),
    ("GYRO", FlightInstructorRatingCode::RotorcraftGyroplane),
    ("INSTI", FlightInstructorRatingCode::InstrumentAirplaneHelicopter),
    ("INSTH", FlightInstructorRatingCode::InstrumentHelicopter),
    ("AME", FlightInstructorRatingCode::AirplaneMultiEngine),
    ("HELGY", FlightInstructorRatingCode::RotorcraftHelicopterGyroplane),
    ("PLIFT", FlightInstructorRatingCode::PoweredLift),
    ("INSTP", FlightInstructorRatingCode::InstrumentPoweredLift),
];

pub const FLIGHT_ENGINEER_RATINGS: &[(&str, FlightEngineerRating)] = &[
    ("JET", FlightEngineerRating::Jet),
    ("TPROP", FlightEngineerRating::Turboprop),
    ("RECIP", FlightEngineerRating::Reciprocating),
];

/// The only rating code accepted on a remote pilot certificate
pub const REMOTE_PILOT_RATING: &str = "SUAS";

pub const MECHANIC_RATINGS: &[(&str, MechanicRating)] = &[
    ("AIRFR", MechanicRating::Airframe),
    ("POWER", MechanicRating::Powerplant),
    ("A", MechanicRating::Airframe),
    ("P", MechanicRating::Powerplant),
];

pub const GROUND_INSTRUCTOR_RATINGS: &[(&str, GroundInstructorRating)] = &[
    ("BASIC", GroundInstructorRating::Basic),
    ("ADV", GroundInstructorRating::Advanced),
    ("INST", GroundInstructorRating::Instrument),
    ("BGI", GroundInstructorRating::Basic),
    ("AGI", GroundInstructorRating::Advanced),
    ("IGI", GroundInstructorRating::Instrument),
];

pub const LIGHT_SPORT_REPAIRMAN_RATINGS: &[(&str, RepairmanLightSportRating)] = &[
    ("MAINT", RepairmanLightSportRating::Maintenance),
    ("INSPT", RepairmanLightSportRating::Inspection),
    ("M", RepairmanLightSportRating::Maintenance),
    ("I", RepairmanLightSportRating::Inspection),
];

/// Rigger rating codes, each completed by the level on its left part
pub const RIGGER_RATINGS: &[(&str, fn(RiggerLevel) -> RiggerRating)] = &[
    ("BACK", RiggerRating::Back),
    ("CHEST", RiggerRating::Chest),
    ("SEAT", RiggerRating::Seat),
    ("LAP", RiggerRating::Lap),
    ("B", RiggerRating::Back),
    ("C", RiggerRating::Chest),
    ("S", RiggerRating::Seat),
    ("L", RiggerRating::Lap),
];

/// Look up a code in a table
pub fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, value)| *value)
}

/// Resolve a certificate type code among the kinds published in one file
pub fn certificate_kind(kinds: &[CertificateKind], code: &str) -> Option<CertificateKind> {
    kinds.iter().copied().find(|kind| kind.code() == code)
}

/// Check that no table maps one code twice
pub fn validate_tables() -> crate::Result<()> {
    fn unique<T>(name: &'static str, table: &[(&str, T)]) -> crate::Result<()> {
        for (i, (code, _)) in table.iter().enumerate() {
            if table[..i].iter().any(|(earlier, _)| earlier == code) {
                return Err(crate::Error::layout_mismatch(
                    name,
                    format!("code '{}' appears more than once", code),
                ));
            }
        }
        Ok(())
    }

    unique("medical classes", MEDICAL_CLASSES)?;
    unique("pilot levels", PILOT_LEVELS)?;
    unique("rigger levels", RIGGER_LEVELS)?;
    unique("pilot ratings", PILOT_RATINGS)?;
    unique("flight instructor ratings", FLIGHT_INSTRUCTOR_RATINGS)?;
    unique("flight engineer ratings", FLIGHT_ENGINEER_RATINGS)?;
    unique("mechanic ratings", MECHANIC_RATINGS)?;
    unique("ground instructor ratings", GROUND_INSTRUCTOR_RATINGS)?;
    unique("light sport repairman ratings", LIGHT_SPORT_REPAIRMAN_RATINGS)?;
    unique("rigger ratings", RIGGER_RATINGS)?;
    Ok(())
}
