//! Data models for the airmen registry
//!
//! This module contains the core data structures for representing certificate
//! holders: identity, postal address, medical qualification and the set of
//! certificates (with their levels and ratings) held by each airman.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod certificate;
pub mod rating;

pub use certificate::{Certificate, CertificateKind};
pub use rating::{
    FlightEngineerRating, FlightInstructorCategory, FlightInstructorRating,
    GroundInstructorRating, InstrumentCategory, MechanicRating, PilotCategoryClass, PilotLevel,
    PilotRating, RepairmanLightSportRating, RiggerLevel, RiggerRating,
};

/// Final identifier to holder mapping produced by a parse
pub type HolderMap = HashMap<String, Holder>;

// =============================================================================
// Holder
// =============================================================================

/// A certificate holder, keyed by the registry's unique identifier
///
/// Values produced from a single file are partial; the holder database folds
/// every partial sharing an identifier into one canonical holder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holder {
    /// Externally assigned identifier, never reassigned (e.g. "A0000014")
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Postal address; `None` when every address field was blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Medical qualification; `None` when the holder has no medical on file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical: Option<Medical>,

    /// Certificates in first-seen order
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl Holder {
    /// Create an empty holder for an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            address: None,
            medical: None,
            certificates: Vec::new(),
        }
    }

    /// Set the name fields
    pub fn with_name(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    /// Add a certificate
    pub fn with_certificate(mut self, certificate: Certificate) -> Self {
        self.certificates.push(certificate);
        self
    }

    /// Full name, first then last, or whichever part is present
    pub fn name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Combine with a partial contributed later for the same identifier
    ///
    /// Later non-absent scalars replace earlier ones. Certificates from both
    /// sides are kept in first-seen order with structural duplicates removed.
    pub fn merged_with(&self, later: &Holder) -> Holder {
        let mut certificates: Vec<Certificate> =
            Vec::with_capacity(self.certificates.len() + later.certificates.len());
        for certificate in self.certificates.iter().chain(&later.certificates) {
            if !certificates.contains(certificate) {
                certificates.push(certificate.clone());
            }
        }

        Holder {
            id: self.id.clone(),
            first_name: later.first_name.clone().or_else(|| self.first_name.clone()),
            last_name: later.last_name.clone().or_else(|| self.last_name.clone()),
            address: later.address.clone().or_else(|| self.address.clone()),
            medical: later.medical.clone().or_else(|| self.medical.clone()),
            certificates,
        }
    }
}

// =============================================================================
// Address
// =============================================================================

/// Postal address as published in the basic holder files
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub street_1: Option<String>,
    pub street_2: Option<String>,
    pub city: Option<String>,
    /// State or province
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    /// FAA administrative region
    pub region: Option<String>,
}

impl Address {
    /// True when all seven fields are absent
    pub fn is_empty(&self) -> bool {
        self.street_1.is_none()
            && self.street_2.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
            && self.country.is_none()
            && self.region.is_none()
    }

    /// Collapse an empty address to `None`
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

// =============================================================================
// Medical
// =============================================================================

/// Agency-issued medical certificate classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedicalClass {
    First,
    Second,
    Third,
}

/// Medical qualification of a holder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medical {
    /// First, second or third class medical
    Faa {
        class: MedicalClass,
        date: NaiveDate,
        expiration_date: Option<NaiveDate>,
    },

    /// Self-certification pathway: course completion plus a periodic checklist
    BasicMed {
        course_date: NaiveDate,
        expiration_date: Option<NaiveDate>,
        cmec_date: Option<NaiveDate>,
    },
}

impl Medical {
    /// Date the qualification lapses, if one was published
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        match self {
            Medical::Faa {
                expiration_date, ..
            }
            | Medical::BasicMed {
                expiration_date, ..
            } => *expiration_date,
        }
    }
}
