//! Filtering case records
//!
//! Filters are predicates over a single [`CaseRecord`]. They compose with
//! [`AndFilter`], [`OrFilter`] and [`NotFilter`] and are evaluated by the
//! engine's filtered counts.

pub mod case;
pub mod date;
pub mod generic;

use std::fmt::Debug;

use crate::models::CaseRecord;

pub use case::{ActiveFilter, StatusFilter, ZoneFilter};
pub use date::DateRangeFilter;
pub use generic::{AndFilter, FilterBuilder, IncludeAllFilter, NotFilter, OrFilter};

/// A predicate over case records
pub trait CaseFilter: Debug + Send + Sync {
    /// Whether the record passes the filter
    fn matches(&self, case: &CaseRecord) -> bool;

    /// Short description for logging
    fn describe(&self) -> String;
}

impl<F: CaseFilter + ?Sized> CaseFilter for Box<F> {
    fn matches(&self, case: &CaseRecord) -> bool {
        (**self).matches(case)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
