//! Mapping of non-pilot certificate rows

use crate::Result;
use crate::app::models::{Certificate, Holder};
use crate::app::services::row_decoder::{NonPilotCertBody, NonPilotCertRow};

/// Map a non-pilot certificate row to a partial holder carrying one certificate
///
/// Ratings map one-to-one; repeated codes collapse in the rating set.
pub fn map_non_pilot_cert_row(row: NonPilotCertRow) -> Result<Holder> {
    let certificate = match row.body {
        NonPilotCertBody::GroundInstructor { ratings } => Certificate::GroundInstructor {
            ratings: ratings.into_iter().collect(),
        },
        NonPilotCertBody::Mechanic { ratings } => Certificate::Mechanic {
            ratings: ratings.into_iter().collect(),
        },
        NonPilotCertBody::ControlTowerOperator => Certificate::ControlTowerOperator,
        NonPilotCertBody::Repairman => Certificate::Repairman,
        NonPilotCertBody::RepairmanExperimental => Certificate::RepairmanExperimental,
        NonPilotCertBody::RepairmanLightSport { ratings } => Certificate::RepairmanLightSport {
            ratings: ratings.into_iter().collect(),
        },
        NonPilotCertBody::Rigger { level, ratings } => Certificate::Rigger {
            level,
            ratings: ratings.into_iter().collect(),
        },
        NonPilotCertBody::Dispatcher => Certificate::Dispatcher,
        NonPilotCertBody::Navigator => Certificate::Navigator,
        NonPilotCertBody::NavigatorLessee => Certificate::NavigatorLessee,
    };

    Ok(Holder::new(row.unique_id)
        .with_name(row.first_name, row.last_name)
        .with_certificate(certificate))
}
