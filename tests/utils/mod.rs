#![allow(dead_code)]

use std::path::{Path, PathBuf};

use case_reader::CaseRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zone labels used by the provincial export
pub const ZONES: &[&str] = &[
    "Calgary Zone",
    "Edmonton Zone",
    "Central Zone",
    "North Zone",
    "South Zone",
    "Unknown",
];

/// Status categories used by the provincial export
pub const STATUSES: &[&str] = &["Active", "Recovered", "Died"];

/// Header row as written by the provincial export
pub const EXPORT_HEADER: &str = "\"\",\"Date reported\",\"Alberta Health Services Zone\",\"Gender\",\"Age group\",\"Case status\",\"Case type\"";

/// Environment variable pointing at a full reference export
pub const REFERENCE_DATA_ENV: &str = "CASE_REFERENCE_DATA";

/// Format one export row
#[must_use]
pub fn export_row(id: usize, date: &str, zone: &str, status: &str) -> String {
    format!("\"{id}\",{date},\"{zone}\",\"Female\",\"30-39 years\",\"{status}\",\"Confirmed\"")
}

/// Write an export with the standard header and the given rows
pub fn write_export(dir: &Path, rows: &[String]) -> PathBuf {
    let path = dir.join("covid19dataexport.csv");
    let mut contents = String::from(EXPORT_HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(&path, contents).expect("failed to write fixture export");
    path
}

/// Generate `count` random records from a fixed seed
#[must_use]
pub fn random_records(seed: u64, count: usize) -> Vec<CaseRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|id| {
            let zone = ZONES[rng.random_range(0..ZONES.len())];
            let status = STATUSES[rng.random_range(0..STATUSES.len())];
            CaseRecord::new(id.to_string(), zone, status)
        })
        .collect()
}

/// Render records as export rows, all reported on the same day
#[must_use]
pub fn to_export_rows(records: &[CaseRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            let id: usize = r.case_id.parse().expect("numeric fixture id");
            export_row(id, "2021-05-01", &r.zone, &r.status)
        })
        .collect()
}

/// Location of a full reference export, if one is available
#[must_use]
pub fn reference_data_path() -> Option<PathBuf> {
    let path = std::env::var(REFERENCE_DATA_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(case_reader::config::DEFAULT_DATA_PATH));
    path.is_file().then_some(path)
}
