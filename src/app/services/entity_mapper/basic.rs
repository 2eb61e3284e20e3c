//! Mapping of basic holder rows

use crate::app::models::{Holder, Medical};
use crate::app::services::row_decoder::BasicRow;
use crate::app::services::row_decoder::taxonomy::MedicalClassCode;
use crate::{Error, Result};

/// Map a basic holder row to a partial holder without certificates
///
/// A class 8 code means no medical regardless of the dates beside it. With no
/// class at all, a BasicMed course date selects the self-certification pathway.
pub fn map_basic_row(row: BasicRow) -> Result<Holder> {
    let medical = match row.medical_class {
        Some(MedicalClassCode::NoMedical) => None,
        Some(MedicalClassCode::Faa(class)) => {
            let date = row
                .medical_date
                .ok_or_else(|| Error::medical_without_date(&row.unique_id))?;
            Some(Medical::Faa {
                class,
                date,
                expiration_date: row.medical_expiration_date,
            })
        }
        None => row.basic_med_course_date.map(|course_date| Medical::BasicMed {
            course_date,
            expiration_date: row.medical_expiration_date,
            cmec_date: row.basic_med_cmec_date,
        }),
    };

    Ok(Holder {
        id: row.unique_id,
        first_name: row.first_name,
        last_name: row.last_name,
        address: row.address.into_option(),
        medical,
        certificates: Vec::new(),
    })
}
