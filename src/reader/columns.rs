//! Header resolution and row conversion.

use csv::StringRecord;

use crate::error::{CaseDataError, Result};
use crate::models::CaseRecord;
use crate::utils::date::{DateFormatConfig, parse_date_string};

const ID_ALIASES: &[&str] = &["", "id", "case id", "case_id"];
const ZONE_ALIASES: &[&str] = &["alberta health services zone", "ahs zone", "zone"];
const STATUS_ALIASES: &[&str] = &["case status", "status"];
const DATE_ALIASES: &[&str] = &["date reported", "date_reported", "date"];
const GENDER_ALIASES: &[&str] = &["gender"];
const AGE_GROUP_ALIASES: &[&str] = &["age group", "age_group"];
const CASE_TYPE_ALIASES: &[&str] = &["case type", "case_type"];

/// Positions of the known columns within a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Case identifier; rows fall back to their ordinal when absent
    pub id: Option<usize>,
    /// Health zone, required
    pub zone: usize,
    /// Case status, required
    pub status: usize,
    /// Date the case was reported
    pub date: Option<usize>,
    /// Reported gender
    pub gender: Option<usize>,
    /// Age band, e.g. "20-29 years"
    pub age_group: Option<usize>,
    /// Confirmed or probable
    pub case_type: Option<usize>,
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| aliases.contains(&header.as_str()))
}

fn field(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).map(str::trim)
}

fn optional_field(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| field(record, i))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn required_field<'a>(
    record: &'a StringRecord,
    idx: usize,
    name: &str,
) -> std::result::Result<&'a str, String> {
    match field(record, idx) {
        None => Err(format!("missing {name} field")),
        Some("") => Err(format!("empty {name}")),
        Some(value) => Ok(value),
    }
}

impl ColumnLayout {
    /// Resolve column positions from a header row
    ///
    /// Zone and status are required; everything else is optional.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let zone = find_column(&normalized, ZONE_ALIASES)
            .ok_or_else(|| CaseDataError::MissingColumn("Alberta Health Services Zone".into()))?;
        let status = find_column(&normalized, STATUS_ALIASES)
            .ok_or_else(|| CaseDataError::MissingColumn("Case status".into()))?;

        Ok(Self {
            id: find_column(&normalized, ID_ALIASES),
            zone,
            status,
            date: find_column(&normalized, DATE_ALIASES),
            gender: find_column(&normalized, GENDER_ALIASES),
            age_group: find_column(&normalized, AGE_GROUP_ALIASES),
            case_type: find_column(&normalized, CASE_TYPE_ALIASES),
        })
    }

    /// Convert one data row into a case record
    ///
    /// `ordinal` is the 1-based data row number, used as the identifier when
    /// the export has no id column or the id cell is blank. The error is a
    /// human-readable reason for the malformed-row log.
    pub fn parse_record(
        &self,
        record: &StringRecord,
        ordinal: usize,
        dates: &DateFormatConfig,
    ) -> std::result::Result<CaseRecord, String> {
        let zone = required_field(record, self.zone, "zone")?;
        let status = required_field(record, self.status, "status")?;

        let case_id = optional_field(record, self.id).unwrap_or_else(|| ordinal.to_string());

        let date_reported = match optional_field(record, self.date) {
            Some(raw) => Some(
                parse_date_string(&raw, dates).ok_or_else(|| format!("unparseable date '{raw}'"))?,
            ),
            None => None,
        };

        Ok(CaseRecord {
            case_id,
            date_reported,
            zone: zone.to_string(),
            gender: optional_field(record, self.gender),
            age_group: optional_field(record, self.age_group),
            status: status.to_string(),
            case_type: optional_field(record, self.case_type),
        })
    }
}
