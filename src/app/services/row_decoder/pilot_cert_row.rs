//! Decoder for the pilot certificate file (`PILOT_CERT.csv`)
//!
//! Pilot ratings carry their own level on the left of the slash; every other
//! kind in this file uses its type code as the left part. Up to eleven rating
//! columns are followed by an unbounded tail of type ratings, which must be
//! well formed on every row even though only pilot certificates carry them.

use super::column_layout::ColumnLayout;
use super::field_parsers::{
    get_optional_field, get_optional_string, get_unique_id, parse_optional_date, rating_fields,
    reject_ratings, split_rating, split_tagged_rating, tagged_ratings,
};
use super::taxonomy::{self, FlightInstructorRatingCode, PilotRatingCode};
use crate::app::models::{CertificateKind, FlightEngineerRating, PilotLevel};
use crate::constants::{cert_columns, columns};
use crate::{Error, Result};
use chrono::NaiveDate;
use csv::StringRecord;

/// One decoded row of the pilot certificate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PilotCertRow {
    pub unique_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub expiration_date: Option<NaiveDate>,
    pub body: PilotCertBody,
}

/// Kind-specific content of a pilot certificate row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PilotCertBody {
    Pilot {
        level: PilotLevel,
        /// Rating codes with the level each was earned at
        ratings: Vec<(PilotLevel, PilotRatingCode)>,
        /// ICAO type designators with the level each was earned at
        type_ratings: Vec<(PilotLevel, String)>,
    },
    FlightInstructor {
        ratings: Vec<FlightInstructorRatingCode>,
    },
    AuthorizedAircraftInstructor,
    RemotePilot,
    FlightEngineer {
        ratings: Vec<FlightEngineerRating>,
    },
    FlightEngineerLessee,
    FlightEngineerForeign {
        ratings: Vec<FlightEngineerRating>,
    },
}

/// Decode a pilot certificate record
pub fn decode_pilot_cert_row(record: &StringRecord, layout: &ColumnLayout) -> Result<PilotCertRow> {
    let unique_id = get_unique_id(record);
    layout.check_width(record, &unique_id)?;
    let id = unique_id.as_str();

    let type_code = get_optional_field(record, cert_columns::TYPE)
        .ok_or_else(|| Error::certificate_type_not_given(id))?;
    let kind = taxonomy::certificate_kind(taxonomy::PILOT_FILE_KINDS, type_code)
        .ok_or_else(|| Error::unknown_certificate_type(type_code, id))?;

    let level = match get_optional_field(record, cert_columns::LEVEL) {
        Some(code) if kind.requires_level() => Some(pilot_level(code, id)?),
        Some(code) => return Err(Error::unknown_certificate_level(code, id)),
        None => None,
    };

    let expiration_date = parse_optional_date(record, layout, cert_columns::EXPIRATION_DATE, id)?;
    let ratings = rating_fields(record, layout.rating_range(record.len()));

    // The tail is checked for every kind but only a pilot certificate keeps it
    let type_ratings = rating_fields(record, layout.type_rating_range(record.len()))
        .map(|raw| -> Result<_> {
            let (sublevel, type_code) = split_rating(raw, id)?;
            Ok((pilot_level(sublevel, id)?, type_code.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let body = match kind {
        CertificateKind::Pilot => {
            let level = level.ok_or_else(|| Error::level_not_given(id))?;
            let ratings = ratings
                .map(|raw| -> Result<_> {
                    let (sublevel, code) = split_rating(raw, id)?;
                    let rating_level = pilot_level(sublevel, id)?;
                    let rating = taxonomy::lookup(taxonomy::PILOT_RATINGS, code)
                        .ok_or_else(|| Error::unknown_rating(code, id))?;
                    Ok((rating_level, rating))
                })
                .collect::<Result<Vec<_>>>()?;
            PilotCertBody::Pilot {
                level,
                ratings,
                type_ratings,
            }
        }
        CertificateKind::FlightInstructor => PilotCertBody::FlightInstructor {
            ratings: tagged_ratings(ratings, kind, taxonomy::FLIGHT_INSTRUCTOR_RATINGS, id)?,
        },
        CertificateKind::RemotePilot => {
            for raw in ratings {
                let code = split_tagged_rating(raw, kind, id)?;
                if code != taxonomy::REMOTE_PILOT_RATING {
                    return Err(Error::unknown_rating(code, id));
                }
            }
            PilotCertBody::RemotePilot
        }
        CertificateKind::FlightEngineer => PilotCertBody::FlightEngineer {
            ratings: tagged_ratings(ratings, kind, taxonomy::FLIGHT_ENGINEER_RATINGS, id)?,
        },
        CertificateKind::FlightEngineerForeign => PilotCertBody::FlightEngineerForeign {
            ratings: tagged_ratings(ratings, kind, taxonomy::FLIGHT_ENGINEER_RATINGS, id)?,
        },
        CertificateKind::AuthorizedAircraftInstructor => {
            reject_ratings(ratings, id)?;
            PilotCertBody::AuthorizedAircraftInstructor
        }
        CertificateKind::FlightEngineerLessee => {
            reject_ratings(ratings, id)?;
            PilotCertBody::FlightEngineerLessee
        }
        other => return Err(Error::unknown_certificate_type(other.code(), id)),
    };

    Ok(PilotCertRow {
        first_name: get_optional_string(record, columns::FIRST_NAME),
        last_name: get_optional_string(record, columns::LAST_NAME),
        expiration_date,
        body,
        unique_id,
    })
}

fn pilot_level(code: &str, unique_id: &str) -> Result<PilotLevel> {
    taxonomy::lookup(taxonomy::PILOT_LEVELS, code)
        .ok_or_else(|| Error::unknown_certificate_level(code, unique_id))
}
