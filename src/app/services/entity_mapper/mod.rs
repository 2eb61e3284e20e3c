//! Row-to-entity mapping for decoded registry rows
//!
//! Each decoded row becomes one partial [`Holder`] carrying only what its file
//! contributes: identity and address from the basic files, a single certificate
//! from the certificate files. Mapping is where kind-specific completeness rules
//! are enforced and where combination codes expand into discrete ratings.
//!
//! # Architecture
//!
//! - [`basic`] - Address collapsing and medical qualification rules
//! - [`pilot`] - Pilot, flight instructor, flight engineer and remote pilot certificates
//! - [`non_pilot`] - Mechanic, rigger, ground instructor, repairman and the rest
//!
//! # Example Usage
//!
//! ```rust
//! use airmen_registry::app::services::entity_mapper::map_row;
//! use airmen_registry::app::services::row_decoder::{RowDecoder, RowKind};
//! use airmen_registry::{Certificate, PilotLevel};
//!
//! # fn example() -> airmen_registry::Result<()> {
//! let decoder = RowDecoder::new(RowKind::PilotCert)?;
//! let fields = ["A0000001", "JOHN", "DOE", "P", "C", "", "C/AMELC"];
//!
//! if let Some(row) = decoder.decode_fields(&fields)? {
//!     let holder = map_row(row)?;
//!     match &holder.certificates[0] {
//!         Certificate::Pilot { level, centerline_thrust_only, .. } => {
//!             assert_eq!(*level, PilotLevel::Commercial);
//!             assert!(*centerline_thrust_only);
//!         }
//!         other => panic!("unexpected certificate {:?}", other),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod basic;
pub mod non_pilot;
pub mod pilot;

#[cfg(test)]
pub mod tests;

pub use basic::map_basic_row;
pub use non_pilot::map_non_pilot_cert_row;
pub use pilot::map_pilot_cert_row;

use crate::Result;
use crate::app::models::Holder;
use crate::app::services::row_decoder::DecodedRow;

/// Map any decoded row to its partial holder
pub fn map_row(row: DecodedRow) -> Result<Holder> {
    match row {
        DecodedRow::Basic(row) => map_basic_row(row),
        DecodedRow::PilotCert(row) => map_pilot_cert_row(row),
        DecodedRow::NonPilotCert(row) => map_non_pilot_cert_row(row),
    }
}
