//! Certificate variants held by airmen

use super::rating::{
    FlightEngineerRating, FlightInstructorRating, GroundInstructorRating, MechanicRating,
    PilotLevel, PilotRating, RepairmanLightSportRating, RiggerLevel, RiggerRating,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A certificate issued to an airman
///
/// Kinds that carry a level or ratings hold them inline; rating sets never
/// contain the same rating twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Certificate {
    /// Pilot certificate (FAR 61 subparts C through G)
    Pilot {
        level: PilotLevel,
        ratings: BTreeSet<PilotRating>,
        /// Multi-engine privileges limited to centerline thrust aircraft
        centerline_thrust_only: bool,
    },

    /// Flight instructor certificate (FAR 61 subpart H)
    FlightInstructor {
        ratings: BTreeSet<FlightInstructorRating>,
        expiration_date: NaiveDate,
    },

    AuthorizedAircraftInstructor,
    RemotePilot,

    /// Ground instructor certificate (FAR 61 subpart I)
    GroundInstructor {
        ratings: BTreeSet<GroundInstructorRating>,
    },

    /// Flight engineer certificate (FAR 63 subpart B)
    FlightEngineer {
        ratings: BTreeSet<FlightEngineerRating>,
    },

    FlightEngineerLessee,

    /// Flight engineer, special purpose foreign (FAR 63.23(b)(1))
    FlightEngineerForeign {
        ratings: BTreeSet<FlightEngineerRating>,
    },

    /// Aviation maintenance technician certificate (FAR 65 subpart D)
    Mechanic {
        ratings: BTreeSet<MechanicRating>,
    },

    ControlTowerOperator,
    Repairman,
    RepairmanExperimental,

    RepairmanLightSport {
        ratings: BTreeSet<RepairmanLightSportRating>,
    },

    /// Parachute rigger certificate (FAR 65 subpart F)
    Rigger {
        level: RiggerLevel,
        ratings: BTreeSet<RiggerRating>,
    },

    Dispatcher,
    Navigator,
    NavigatorLessee,
}

impl Certificate {
    /// The payload-free kind tag of this certificate
    pub fn kind(&self) -> CertificateKind {
        match self {
            Certificate::Pilot { .. } => CertificateKind::Pilot,
            Certificate::FlightInstructor { .. } => CertificateKind::FlightInstructor,
            Certificate::AuthorizedAircraftInstructor => {
                CertificateKind::AuthorizedAircraftInstructor
            }
            Certificate::RemotePilot => CertificateKind::RemotePilot,
            Certificate::GroundInstructor { .. } => CertificateKind::GroundInstructor,
            Certificate::FlightEngineer { .. } => CertificateKind::FlightEngineer,
            Certificate::FlightEngineerLessee => CertificateKind::FlightEngineerLessee,
            Certificate::FlightEngineerForeign { .. } => CertificateKind::FlightEngineerForeign,
            Certificate::Mechanic { .. } => CertificateKind::Mechanic,
            Certificate::ControlTowerOperator => CertificateKind::ControlTowerOperator,
            Certificate::Repairman => CertificateKind::Repairman,
            Certificate::RepairmanExperimental => CertificateKind::RepairmanExperimental,
            Certificate::RepairmanLightSport { .. } => CertificateKind::RepairmanLightSport,
            Certificate::Rigger { .. } => CertificateKind::Rigger,
            Certificate::Dispatcher => CertificateKind::Dispatcher,
            Certificate::Navigator => CertificateKind::Navigator,
            Certificate::NavigatorLessee => CertificateKind::NavigatorLessee,
        }
    }
}

/// Certificate kinds, as identified by the registry's single-letter type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CertificateKind {
    Pilot,
    FlightInstructor,
    AuthorizedAircraftInstructor,
    RemotePilot,
    GroundInstructor,
    FlightEngineer,
    FlightEngineerLessee,
    FlightEngineerForeign,
    Mechanic,
    ControlTowerOperator,
    Repairman,
    RepairmanExperimental,
    RepairmanLightSport,
    Rigger,
    Dispatcher,
    Navigator,
    NavigatorLessee,
}

impl CertificateKind {
    /// Type code used in the certificate files
    ///
    /// For kinds other than pilot and rigger this code doubles as the required
    /// left part of every rating on the row.
    pub fn code(&self) -> &'static str {
        match self {
            CertificateKind::Pilot => "P",
            CertificateKind::FlightInstructor => "F",
            CertificateKind::AuthorizedAircraftInstructor => "A",
            CertificateKind::RemotePilot => "U",
            CertificateKind::GroundInstructor => "G",
            CertificateKind::FlightEngineer => "E",
            CertificateKind::FlightEngineerLessee => "H",
            CertificateKind::FlightEngineerForeign => "X",
            CertificateKind::Mechanic => "M",
            CertificateKind::ControlTowerOperator => "T",
            CertificateKind::Repairman => "R",
            CertificateKind::RepairmanExperimental => "I",
            CertificateKind::RepairmanLightSport => "L",
            CertificateKind::Rigger => "W",
            CertificateKind::Dispatcher => "D",
            CertificateKind::Navigator => "N",
            CertificateKind::NavigatorLessee => "J",
        }
    }

    /// True for kinds that carry a certificate level; a level on any other
    /// kind is rejected when decoding
    pub fn requires_level(&self) -> bool {
        matches!(self, CertificateKind::Pilot | CertificateKind::Rigger)
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let rigger = Certificate::Rigger {
            level: RiggerLevel::Master,
            ratings: BTreeSet::new(),
        };
        assert_eq!(rigger.kind(), CertificateKind::Rigger);
        assert_eq!(rigger.kind().code(), "W");
        assert!(rigger.kind().requires_level());

        assert_eq!(Certificate::NavigatorLessee.kind().code(), "J");
        assert!(CertificateKind::Pilot.requires_level());
        assert!(!CertificateKind::Mechanic.requires_level());
        assert!(!CertificateKind::FlightInstructor.requires_level());
    }

    #[test]
    fn test_structural_equality_ignores_insertion_order() {
        let a = Certificate::Mechanic {
            ratings: [MechanicRating::Airframe, MechanicRating::Powerplant]
                .into_iter()
                .collect(),
        };
        let b = Certificate::Mechanic {
            ratings: [MechanicRating::Powerplant, MechanicRating::Airframe]
                .into_iter()
                .collect(),
        };
        assert_eq!(a, b);
    }
}
