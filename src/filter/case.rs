//! Filters on the categorical columns

use crate::filter::CaseFilter;
use crate::models::{ACTIVE_STATUS, CaseRecord};

/// Keeps records whose status equals the given value exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    status: String,
}

impl StatusFilter {
    /// Create a new status filter
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl CaseFilter for StatusFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        case.status == self.status
    }

    fn describe(&self) -> String {
        format!("status = '{}'", self.status)
    }
}

/// Keeps records with status "Active"
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveFilter;

impl CaseFilter for ActiveFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        case.is_active()
    }

    fn describe(&self) -> String {
        format!("status = '{ACTIVE_STATUS}'")
    }
}

/// Keeps records in any of the given zones (exact match)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFilter {
    zones: Vec<String>,
}

impl ZoneFilter {
    /// Create a filter for a single zone
    #[must_use]
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zones: vec![zone.into()],
        }
    }

    /// Create a filter matching any zone in the list
    #[must_use]
    pub fn any_of<I, S>(zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            zones: zones.into_iter().map(Into::into).collect(),
        }
    }
}

impl CaseFilter for ZoneFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        self.zones.iter().any(|zone| case.in_zone(zone))
    }

    fn describe(&self) -> String {
        match self.zones.as_slice() {
            [zone] => format!("zone = '{zone}'"),
            zones => format!("zone in {zones:?}"),
        }
    }
}
