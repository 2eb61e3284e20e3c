//! Decoder for the non-pilot certificate file (`NONPILOT_CERT.csv`)

use super::column_layout::ColumnLayout;
use super::field_parsers::{
    get_optional_field, get_optional_string, get_unique_id, parse_optional_date, rating_fields,
    reject_ratings, split_rating, tagged_ratings,
};
use super::taxonomy;
use crate::app::models::{
    CertificateKind, GroundInstructorRating, MechanicRating, RepairmanLightSportRating,
    RiggerLevel, RiggerRating,
};
use crate::constants::{cert_columns, columns};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;

/// One decoded row of the non-pilot certificate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonPilotCertRow {
    pub unique_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub body: NonPilotCertBody,
}

/// Kind-specific content of a non-pilot certificate row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonPilotCertBody {
    GroundInstructor {
        ratings: Vec<GroundInstructorRating>,
    },
    Mechanic {
        ratings: Vec<MechanicRating>,
    },
    ControlTowerOperator,
    Repairman,
    RepairmanExperimental,
    RepairmanLightSport {
        ratings: Vec<RepairmanLightSportRating>,
    },
    Rigger {
        level: RiggerLevel,
        ratings: Vec<RiggerRating>,
    },
    Dispatcher,
    Navigator,
    NavigatorLessee,
}

/// Decode a non-pilot certificate record
pub fn decode_non_pilot_cert_row(
    record: &StringRecord,
    layout: &ColumnLayout,
) -> Result<NonPilotCertRow> {
    let unique_id = get_unique_id(record);
    layout.check_width(record, &unique_id)?;
    let id = unique_id.as_str();

    let type_code = get_optional_field(record, cert_columns::TYPE)
        .ok_or_else(|| Error::certificate_type_not_given(id))?;
    let kind = taxonomy::certificate_kind(taxonomy::NON_PILOT_FILE_KINDS, type_code)
        .ok_or_else(|| Error::unknown_certificate_type(type_code, id))?;

    let level = match get_optional_field(record, cert_columns::LEVEL) {
        Some(code) if kind.requires_level() => Some(rigger_level(code, id)?),
        Some(code) => return Err(Error::unknown_certificate_level(code, id)),
        None => None,
    };

    let expiration_date = parse_optional_date(record, layout, cert_columns::EXPIRATION_DATE, id)?;
    let ratings = rating_fields(record, layout.rating_range(record.len()));

    let body = match kind {
        CertificateKind::GroundInstructor => NonPilotCertBody::GroundInstructor {
            ratings: tagged_ratings(ratings, kind, taxonomy::GROUND_INSTRUCTOR_RATINGS, id)?,
        },
        CertificateKind::Mechanic => NonPilotCertBody::Mechanic {
            ratings: tagged_ratings(ratings, kind, taxonomy::MECHANIC_RATINGS, id)?,
        },
        CertificateKind::RepairmanLightSport => NonPilotCertBody::RepairmanLightSport {
            ratings: tagged_ratings(ratings, kind, taxonomy::LIGHT_SPORT_REPAIRMAN_RATINGS, id)?,
        },
        CertificateKind::Rigger => {
            let level = level.ok_or_else(|| Error::level_not_given(id))?;
            let ratings = ratings
                .map(|raw| -> Result<_> {
                    let (sublevel, code) = split_rating(raw, id)?;
                    let rating_level = rigger_level(sublevel, id)?;
                    let rating = taxonomy::lookup(taxonomy::RIGGER_RATINGS, code)
                        .ok_or_else(|| Error::unknown_rating(code, id))?;
                    Ok(rating(rating_level))
                })
                .collect::<Result<Vec<_>>>()?;
            NonPilotCertBody::Rigger { level, ratings }
        }
        CertificateKind::ControlTowerOperator => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::ControlTowerOperator
        }
        CertificateKind::Repairman => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::Repairman
        }
        CertificateKind::RepairmanExperimental => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::RepairmanExperimental
        }
        CertificateKind::Dispatcher => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::Dispatcher
        }
        CertificateKind::Navigator => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::Navigator
        }
        CertificateKind::NavigatorLessee => {
            reject_ratings(ratings, id)?;
            NonPilotCertBody::NavigatorLessee
        }
        other => return Err(Error::unknown_certificate_type(other.code(), id)),
    };

    Ok(NonPilotCertRow {
        first_name: get_optional_string(record, columns::FIRST_NAME),
        last_name: get_optional_string(record, columns::LAST_NAME),
        expiration_date,
        body,
        unique_id,
    })
}

fn rigger_level(code: &str, unique_id: &str) -> Result<RiggerLevel> {
    taxonomy::lookup(taxonomy::RIGGER_LEVELS, code)
        .ok_or_else(|| Error::unknown_certificate_level(code, unique_id))
}
