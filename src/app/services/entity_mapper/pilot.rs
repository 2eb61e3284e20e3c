//! Mapping of pilot certificate rows
//!
//! Combination codes expand here: `INSTI` is both instrument airplane and
//! instrument helicopter, `HELGY` is both rotorcraft classes, `ASME` on an
//! instructor certificate is both airplane engine classes. `AMELC` contributes
//! the multi-engine land rating and marks the certificate centerline thrust only.

use crate::app::models::{
    Certificate, FlightInstructorCategory, FlightInstructorRating, Holder, InstrumentCategory,
    PilotCategoryClass, PilotLevel, PilotRating,
};
use crate::app::services::row_decoder::taxonomy::{FlightInstructorRatingCode, PilotRatingCode};
use crate::app::services::row_decoder::{PilotCertBody, PilotCertRow};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Map a pilot certificate row to a partial holder carrying one certificate
pub fn map_pilot_cert_row(row: PilotCertRow) -> Result<Holder> {
    let PilotCertRow {
        unique_id,
        first_name,
        last_name,
        expiration_date,
        body,
    } = row;

    let certificate = match body {
        PilotCertBody::Pilot {
            level,
            ratings,
            type_ratings,
        } => {
            let mut expanded = BTreeSet::new();
            let mut centerline_thrust_only = false;

            for (rating_level, code) in ratings {
                if code == PilotRatingCode::AirplaneMultiEngineLandCenterlineThrust {
                    centerline_thrust_only = true;
                }
                expanded.extend(expand_pilot_rating(code, rating_level));
            }
            expanded.extend(
                type_ratings
                    .into_iter()
                    .map(|(level, type_code)| PilotRating::Type { type_code, level }),
            );

            Certificate::Pilot {
                level,
                ratings: expanded,
                centerline_thrust_only,
            }
        }
        PilotCertBody::FlightInstructor { ratings } => {
            let expiration_date =
                expiration_date.ok_or_else(|| Error::expiration_date_not_given(&unique_id))?;
            Certificate::FlightInstructor {
                ratings: ratings
                    .into_iter()
                    .flat_map(expand_flight_instructor_rating)
                    .collect(),
                expiration_date,
            }
        }
        PilotCertBody::AuthorizedAircraftInstructor => Certificate::AuthorizedAircraftInstructor,
        PilotCertBody::RemotePilot => Certificate::RemotePilot,
        PilotCertBody::FlightEngineer { ratings } => Certificate::FlightEngineer {
            ratings: ratings.into_iter().collect(),
        },
        PilotCertBody::FlightEngineerLessee => Certificate::FlightEngineerLessee,
        PilotCertBody::FlightEngineerForeign { ratings } => Certificate::FlightEngineerForeign {
            ratings: ratings.into_iter().collect(),
        },
    };

    Ok(Holder::new(unique_id)
        .with_name(first_name, last_name)
        .with_certificate(certificate))
}

/// Expand one pilot rating code into the ratings it stands for
///
/// Sport pilot eligibility is implied by the certificate level and yields no rating.
pub fn expand_pilot_rating(code: PilotRatingCode, level: PilotLevel) -> Vec<PilotRating> {
    use PilotCategoryClass as CC;

    let category = |category_class| PilotRating::CategoryClass {
        category_class,
        level,
    };

    match code {
        PilotRatingCode::AirplaneSingleEngineLand => vec![category(CC::AirplaneSingleEngineLand)],
        PilotRatingCode::AirplaneSingleEngineSea => vec![category(CC::AirplaneSingleEngineSea)],
        PilotRatingCode::AirplaneMultiEngineLand
        | PilotRatingCode::AirplaneMultiEngineLandCenterlineThrust => {
            vec![category(CC::AirplaneMultiEngineLand)]
        }
        PilotRatingCode::AirplaneMultiEngineSea => vec![category(CC::AirplaneMultiEngineSea)],
        PilotRatingCode::Glider => vec![category(CC::Glider)],
        PilotRatingCode::RotorcraftHelicopter => vec![category(CC::RotorcraftHelicopter)],
        PilotRatingCode::RotorcraftGyroplane => vec![category(CC::RotorcraftGyroplane)],
        PilotRatingCode::RotorcraftHelicopterGyroplane => vec![
            category(CC::RotorcraftHelicopter),
            category(CC::RotorcraftGyroplane),
        ],
        PilotRatingCode::LighterThanAirBalloon => vec![category(CC::LighterThanAirBalloon)],
        PilotRatingCode::LighterThanAirAirship => vec![category(CC::LighterThanAirAirship)],
        PilotRatingCode::PoweredLift => vec![category(CC::PoweredLift)],
        PilotRatingCode::InstrumentAirplane => {
            vec![PilotRating::Instrument(InstrumentCategory::Airplane)]
        }
        PilotRatingCode::InstrumentHelicopter => {
            vec![PilotRating::Instrument(InstrumentCategory::Helicopter)]
        }
        PilotRatingCode::InstrumentAirplaneHelicopter => vec![
            PilotRating::Instrument(InstrumentCategory::Airplane),
            PilotRating::Instrument(InstrumentCategory::Helicopter),
        ],
        PilotRatingCode::InstrumentPoweredLift => {
            vec![PilotRating::Instrument(InstrumentCategory::PoweredLift)]
        }
        PilotRatingCode::Sport => Vec::new(),
    }
}

/// Expand one flight instructor rating code into the ratings it stands for
pub fn expand_flight_instructor_rating(
    code: FlightInstructorRatingCode,
) -> Vec<FlightInstructorRating> {
    use FlightInstructorCategory as Cat;
    use FlightInstructorRating::{Category, Instrument};

    match code {
        FlightInstructorRatingCode::AirplaneSingleEngine => vec![Category(Cat::AirplaneSingleEngine)],
        FlightInstructorRatingCode::AirplaneMultiEngine => vec![Category(Cat::AirplaneMultiEngine)],
        FlightInstructorRatingCode::AirplaneSingleMultiEngine => vec![
            Category(Cat::AirplaneSingleEngine),
            Category(Cat::AirplaneMultiEngine),
        ],
        FlightInstructorRatingCode::Glider => vec![Category(Cat::Glider)],
        FlightInstructorRatingCode::RotorcraftHelicopter => vec![Category(Cat::RotorcraftHelicopter)],
        FlightInstructorRatingCode::RotorcraftGyroplane => vec![Category(Cat::RotorcraftGyroplane)],
        FlightInstructorRatingCode::RotorcraftHelicopterGyroplane => vec![
            Category(Cat::RotorcraftHelicopter),
            Category(Cat::RotorcraftGyroplane),
        ],
        FlightInstructorRatingCode::PoweredLift => vec![Category(Cat::PoweredLift)],
        FlightInstructorRatingCode::InstrumentAirplane => {
            vec![Instrument(InstrumentCategory::Airplane)]
        }
        FlightInstructorRatingCode::InstrumentHelicopter => {
            vec![Instrument(InstrumentCategory::Helicopter)]
        }
        FlightInstructorRatingCode::InstrumentAirplaneHelicopter => vec![
            Instrument(InstrumentCategory::Airplane),
            Instrument(InstrumentCategory::Helicopter),
        ],
        FlightInstructorRatingCode::InstrumentPoweredLift => {
            vec![Instrument(InstrumentCategory::PoweredLift)]
        }
        FlightInstructorRatingCode::Sport => vec![FlightInstructorRating::Sport],
    }
}
