//! Case record model
//!
//! One row of a case export. Records are built once by the reader and
//! never change afterwards.

use chrono::NaiveDate;
use serde::Serialize;

/// Status value marking a case as active
pub const ACTIVE_STATUS: &str = "Active";
/// Status value marking a case as recovered
pub const RECOVERED_STATUS: &str = "Recovered";
/// Status value marking a case as died
pub const DIED_STATUS: &str = "Died";

/// Representation of a single tracked case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    /// Case identifier
    pub case_id: String,
    /// Date the case was reported
    pub date_reported: Option<NaiveDate>,
    /// Zone label, never empty
    pub zone: String,
    /// Gender as exported
    pub gender: Option<String>,
    /// Age group bucket as exported
    pub age_group: Option<String>,
    /// Status category, never empty
    pub status: String,
    /// Case type (e.g. "Confirmed", "Probable")
    pub case_type: Option<String>,
}

impl CaseRecord {
    /// Create a record with only the fields aggregation depends on
    #[must_use]
    pub fn new(
        case_id: impl Into<String>,
        zone: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            date_reported: None,
            zone: zone.into(),
            gender: None,
            age_group: None,
            status: status.into(),
            case_type: None,
        }
    }

    /// Set the reported date
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_reported = Some(date);
        self
    }

    /// Whether the status is exactly "Active"
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    /// Whether the record belongs to the given zone (exact match)
    #[must_use]
    pub fn in_zone(&self, zone: &str) -> bool {
        self.zone == zone
    }
}
