//! The four files of the registry distribution

use crate::constants::{NONPILOT_BASIC_FILE, NONPILOT_CERT_FILE, PILOT_BASIC_FILE, PILOT_CERT_FILE};
use crate::app::services::row_decoder::RowKind;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One file of the distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataFile {
    PilotBasic,
    NonPilotBasic,
    PilotCert,
    NonPilotCert,
}

impl DataFile {
    /// Every file, basic files first so certificate files are folded in after identity
    pub const ALL: [DataFile; 4] = [
        DataFile::PilotBasic,
        DataFile::NonPilotBasic,
        DataFile::PilotCert,
        DataFile::NonPilotCert,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DataFile::PilotBasic => PILOT_BASIC_FILE,
            DataFile::NonPilotBasic => NONPILOT_BASIC_FILE,
            DataFile::PilotCert => PILOT_CERT_FILE,
            DataFile::NonPilotCert => NONPILOT_CERT_FILE,
        }
    }

    /// Short name accepted by [`FromStr`]
    pub fn slug(&self) -> &'static str {
        match self {
            DataFile::PilotBasic => "pilot-basic",
            DataFile::NonPilotBasic => "nonpilot-basic",
            DataFile::PilotCert => "pilot-cert",
            DataFile::NonPilotCert => "nonpilot-cert",
        }
    }

    /// Row kind of every record in the file
    pub fn row_kind(&self) -> RowKind {
        match self {
            DataFile::PilotBasic | DataFile::NonPilotBasic => RowKind::Basic,
            DataFile::PilotCert => RowKind::PilotCert,
            DataFile::NonPilotCert => RowKind::NonPilotCert,
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for DataFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        DataFile::ALL
            .into_iter()
            .find(|file| file.file_name().eq_ignore_ascii_case(s) || file.slug() == s)
            .ok_or_else(|| Error::configuration(format!("unknown data file '{}'", s)))
    }
}
