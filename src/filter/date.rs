//! Date range filtering

use chrono::NaiveDate;

use crate::filter::CaseFilter;
use crate::models::CaseRecord;

/// A filter that includes only records reported within a date range
///
/// Both bounds are inclusive and optional. Records without a reported date
/// never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeFilter {
    /// The start date (inclusive)
    start_date: Option<NaiveDate>,

    /// The end date (inclusive)
    end_date: Option<NaiveDate>,
}

impl DateRangeFilter {
    /// Create a new date range filter
    #[must_use]
    pub const fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Records reported on or after `date`
    #[must_use]
    pub const fn since(date: NaiveDate) -> Self {
        Self::new(Some(date), None)
    }

    /// Records reported on or before `date`
    #[must_use]
    pub const fn until(date: NaiveDate) -> Self {
        Self::new(None, Some(date))
    }
}

impl CaseFilter for DateRangeFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        let Some(date) = case.date_reported else {
            return false;
        };
        self.start_date.is_none_or(|start| date >= start)
            && self.end_date.is_none_or(|end| date <= end)
    }

    fn describe(&self) -> String {
        let bound = |d: Option<NaiveDate>| d.map_or_else(|| "..".to_string(), |d| d.to_string());
        format!(
            "date_reported in [{}, {}]",
            bound(self.start_date),
            bound(self.end_date)
        )
    }
}
