//! Generic filter combinators
//!
//! This module provides the logical building blocks used to compose case
//! filters: include-all, AND, OR and NOT, plus a builder for the common
//! "all of these conditions" case.

use chrono::NaiveDate;
use itertools::Itertools;

use crate::filter::{ActiveFilter, CaseFilter, DateRangeFilter, StatusFilter, ZoneFilter};
use crate::models::CaseRecord;

/// A filter that always includes all records
#[derive(Debug, Clone, Copy, Default)]
pub struct IncludeAllFilter;

impl CaseFilter for IncludeAllFilter {
    fn matches(&self, _case: &CaseRecord) -> bool {
        true
    }

    fn describe(&self) -> String {
        "all".to_string()
    }
}

/// A filter that combines multiple filters with a logical AND
///
/// An empty AND matches every record.
#[derive(Debug, Default)]
pub struct AndFilter {
    filters: Vec<Box<dyn CaseFilter>>,
}

impl AndFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<Box<dyn CaseFilter>>) -> Self {
        Self { filters }
    }

    /// Number of combined filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filters are combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl CaseFilter for AndFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        self.filters.iter().all(|f| f.matches(case))
    }

    fn describe(&self) -> String {
        if self.filters.is_empty() {
            return IncludeAllFilter.describe();
        }
        self.filters.iter().map(|f| f.describe()).join(" AND ")
    }
}

/// A filter that combines multiple filters with a logical OR
///
/// An empty OR matches nothing.
#[derive(Debug, Default)]
pub struct OrFilter {
    filters: Vec<Box<dyn CaseFilter>>,
}

impl OrFilter {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<Box<dyn CaseFilter>>) -> Self {
        Self { filters }
    }
}

impl CaseFilter for OrFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        self.filters.iter().any(|f| f.matches(case))
    }

    fn describe(&self) -> String {
        if self.filters.is_empty() {
            return "none".to_string();
        }
        format!(
            "({})",
            self.filters.iter().map(|f| f.describe()).join(" OR ")
        )
    }
}

/// A filter that negates another filter
#[derive(Debug)]
pub struct NotFilter {
    filter: Box<dyn CaseFilter>,
}

impl NotFilter {
    /// Create a new NOT filter
    #[must_use]
    pub fn new(filter: impl CaseFilter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
        }
    }
}

impl CaseFilter for NotFilter {
    fn matches(&self, case: &CaseRecord) -> bool {
        !self.filter.matches(case)
    }

    fn describe(&self) -> String {
        format!("NOT ({})", self.filter.describe())
    }
}

/// Builder collecting conditions that must all hold
#[derive(Debug, Default)]
pub struct FilterBuilder {
    filters: Vec<Box<dyn CaseFilter>>,
}

impl FilterBuilder {
    /// Start with no conditions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact status
    #[must_use]
    pub fn status(self, status: impl Into<String>) -> Self {
        self.with(StatusFilter::new(status))
    }

    /// Require status "Active"
    #[must_use]
    pub fn active(self) -> Self {
        self.with(ActiveFilter)
    }

    /// Require an exact zone
    #[must_use]
    pub fn zone(self, zone: impl Into<String>) -> Self {
        self.with(ZoneFilter::new(zone))
    }

    /// Require a reported date within the inclusive range
    #[must_use]
    pub fn reported_between(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.with(DateRangeFilter::new(start, end))
    }

    /// Add an arbitrary filter
    #[must_use]
    pub fn with(mut self, filter: impl CaseFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Combine all conditions with AND
    #[must_use]
    pub fn build(self) -> AndFilter {
        AndFilter::new(self.filters)
    }
}
