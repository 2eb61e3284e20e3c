//! Shared test utilities and fixtures for ingestion tests
//!
//! Fixture files follow the distribution's layout: one header line, then
//! comma-separated records with a trailing comma.

use super::{AirmenParser, DataFile, ErrorCollector, IngestOutcome};
use crate::config::ParserConfig;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

mod stats_tests;

pub const BASIC_HEADER: &str = "UNIQUE ID, FIRST NAME, LAST NAME, STREET 1, STREET 2, CITY, STATE, ZIP CODE, COUNTRY, REGION, MED CLASS, MED DATE, MED EXP DATE, BASIC MED COURSE DATE, BASIC MED CMEC DATE,";

pub const CERT_HEADER: &str = "UNIQUE ID, FIRST NAME, LAST NAME, TYPE, LEVEL, EXPIRE DATE, RATING1, RATING2, RATING3, RATING4, RATING5, RATING6, RATING7, RATING8, RATING9, RATING10, RATING11, TYPERATING1, TYPERATING2,";

/// Join fields into one record line with the trailing comma
pub fn line(fields: &[&str]) -> String {
    format!("{},", fields.join(","))
}

/// A certificate record; rating columns are padded when type ratings follow
pub fn cert_line(head: [&str; 6], ratings: &[&str], type_ratings: &[&str]) -> String {
    let mut fields: Vec<&str> = head.to_vec();
    fields.extend(ratings);
    if !type_ratings.is_empty() {
        fields.resize(17, "");
        fields.extend(type_ratings);
    }
    line(&fields)
}

pub fn pilot_basic() -> String {
    [
        BASIC_HEADER.to_string(),
        line(&["A0000001", "JOHN", "DOE", "123 MAIN ST", "", "SEATTLE", "WA", "98101", "USA", "NM", "1", "011523", "013124", "", ""]),
        line(&["A0000002", "JANE", "SMITH", "", "", "", "", "", "", "", "", "", "", "110122", "110124"]),
        line(&["A0000003", "BOB", "JONES", "", "", "", "", "", "", "", "2", "", "", "", ""]),
        line(&["A0000006", "DAVID", "BROWN", "10 HIGH ST", "", "LONDON", "", "", "UK", "", "8", "", "", "", ""]),
    ]
    .join("\n")
}

pub fn nonpilot_basic() -> String {
    [
        BASIC_HEADER.to_string(),
        line(&["A0000001", "JOHN", "DOE", "9 ELM ST", "", "TACOMA", "WA", "98402", "USA", "NM", "", "", "", "", ""]),
        line(&["A0000008", "FRANK", "HARRIS", "", "", "", "", "", "", "", "", "", "", "", ""]),
    ]
    .join("\n")
}

pub fn pilot_cert() -> String {
    [
        CERT_HEADER.to_string(),
        cert_line(["A0000001", "JOHN", "DOE", "P", "A", ""], &["A/AMEL", "A/ASEL", "A/INSTA"], &["A/B737", "A/B757"]),
        cert_line(["A0000002", "JANE", "SMITH", "P", "C", ""], &["C/ASEL"], &[]),
        cert_line(["A0000002", "JANE", "SMITH", "F", "", "123125"], &["F/ASE", "F/INSTA"], &[]),
        cert_line(["A0000004", "ALICE", "WILSON", "P", "C", ""], &["C/AMELC"], &[]),
        cert_line(["A0000005", "CHARLIE", "BROWN", "P", "", ""], &["P/ASEL"], &[]),
    ]
    .join("\n")
}

pub fn nonpilot_cert() -> String {
    [
        CERT_HEADER.to_string(),
        cert_line(["A0000001", "JOHN", "DOE", "G", "", ""], &["G/BGI"], &[]),
        cert_line(["A0000008", "FRANK", "HARRIS", "M", "", ""], &["M/A", "M/P"], &[]),
        cert_line(["A0000010", "HENRY", "LEWIS", "W", "M", ""], &["M/B", "S/S"], &[]),
        cert_line(["A0000016", "LEO", "WALKER", "D", "", ""], &[], &[]),
        cert_line(["A0000018", "NINA", "YOUNG", "W", "", ""], &["M/B"], &[]),
    ]
    .join("\n")
}

/// Write one fixture file into a directory
pub fn write_file(dir: &Path, file: DataFile, contents: &str) {
    fs::write(dir.join(file.file_name()), contents).unwrap();
}

/// Directory holding all four fixture files
pub fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), DataFile::PilotBasic, &pilot_basic());
    write_file(dir.path(), DataFile::NonPilotBasic, &nonpilot_basic());
    write_file(dir.path(), DataFile::PilotCert, &pilot_cert());
    write_file(dir.path(), DataFile::NonPilotCert, &nonpilot_cert());
    dir
}

/// Parse files from a directory, collecting errors
pub async fn parse_dir(
    config: ParserConfig,
    files: &[DataFile],
) -> (IngestOutcome, Arc<ErrorCollector>) {
    let parser = AirmenParser::new(config).unwrap();
    let errors = Arc::new(ErrorCollector::new());
    let outcome = parser
        .parse_with_stats(files, None, errors.clone())
        .await
        .unwrap();
    (outcome, errors)
}
