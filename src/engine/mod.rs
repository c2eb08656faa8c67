//! Case aggregation engine
//!
//! Holds a case export in memory and answers aggregate queries over it.
//! The process-wide instance is loaded on first access through
//! [`CaseAggregationEngine::instance`] or [`CaseAggregationEngine::init`];
//! after that the data never changes and every query takes `&self`.
//!
//! Engines can also be built directly with [`CaseAggregationEngine::load`]
//! or [`CaseAggregationEngine::from_records`] when a caller wants to own one.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::config::CaseReaderConfig;
use crate::error::{CaseDataError, Result};
use crate::filter::CaseFilter;
use crate::models::CaseRecord;
use crate::reader::{LoadReport, read_cases};

/// The process-wide engine, or the error its load failed with
static INSTANCE: OnceCell<std::result::Result<CaseAggregationEngine, Arc<CaseDataError>>> =
    OnceCell::new();

/// Read-only aggregate access to a loaded case dataset
#[derive(Debug)]
pub struct CaseAggregationEngine {
    /// Records in file order
    cases: Vec<CaseRecord>,
    report: LoadReport,
}

impl CaseAggregationEngine {
    /// Get the process-wide engine, loading it on first call
    ///
    /// The first call reads its configuration from the environment (see
    /// [`CaseReaderConfig::from_env`]) and blocks until the dataset is
    /// parsed. Concurrent first callers wait for that single load.
    ///
    /// # Errors
    /// Returns [`CaseDataError::DataLoad`] if the load failed. The failure is
    /// permanent for the process: later calls return the same cause without
    /// retrying.
    pub fn instance() -> Result<&'static Self> {
        Self::global(CaseReaderConfig::from_env).0
    }

    /// Get the process-wide engine, loading it with `config` on first call
    ///
    /// If the engine was already initialised (or its load already failed)
    /// `config` is ignored.
    pub fn init(config: CaseReaderConfig) -> Result<&'static Self> {
        let path = config.data_path.clone();
        let (engine, loaded) = Self::global(move || Ok(config));
        if !loaded {
            log::debug!(
                "Case engine already initialised, ignoring configuration for {}",
                path.display()
            );
        }
        engine
    }

    /// Resolve the global instance, reporting whether this call ran the load
    fn global<F>(config: F) -> (Result<&'static Self>, bool)
    where
        F: FnOnce() -> Result<CaseReaderConfig>,
    {
        let mut loaded = false;
        let slot = INSTANCE.get_or_init(|| {
            loaded = true;
            config()
                .and_then(|config| Self::load(&config))
                .map_err(|err| {
                    log::error!("Failed to load case data: {err}");
                    Arc::new(err)
                })
        });

        let engine = match slot {
            Ok(engine) => Ok(engine),
            Err(err) => Err(CaseDataError::DataLoad(Arc::clone(err))),
        };
        (engine, loaded)
    }

    /// Load an engine that is not shared through the global instance
    pub fn load(config: &CaseReaderConfig) -> Result<Self> {
        let (cases, report) = read_cases(config)?;
        Ok(Self { cases, report })
    }

    /// Build an engine over records that are already in memory
    #[must_use]
    pub fn from_records(cases: Vec<CaseRecord>) -> Self {
        let report = LoadReport {
            source: PathBuf::from("<memory>"),
            rows_read: cases.len(),
            records_loaded: cases.len(),
            rows_skipped: 0,
            elapsed: Duration::ZERO,
        };
        Self { cases, report }
    }

    /// All loaded records, in file order
    #[must_use]
    pub fn all_cases(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Number of loaded records
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the dataset has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Details of the load that produced this engine
    #[must_use]
    pub const fn load_report(&self) -> &LoadReport {
        &self.report
    }

    /// Number of records with status "Active"
    #[must_use]
    pub fn count_total_active_cases(&self) -> usize {
        self.cases.par_iter().filter(|case| case.is_active()).count()
    }

    /// Number of active records in `zone`
    ///
    /// Zone names are matched exactly; an unknown zone counts 0.
    #[must_use]
    pub fn count_active_cases_by_zone(&self, zone: &str) -> usize {
        self.cases
            .par_iter()
            .filter(|case| case.is_active() && case.in_zone(zone))
            .count()
    }

    /// Every zone label exactly once, in order of first appearance
    #[must_use]
    pub fn distinct_zones(&self) -> Vec<String> {
        self.cases
            .iter()
            .map(|case| case.zone.as_str())
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Every status value exactly once, in order of first appearance
    #[must_use]
    pub fn distinct_statuses(&self) -> Vec<String> {
        self.cases
            .iter()
            .map(|case| case.status.as_str())
            .unique()
            .map(str::to_string)
            .collect()
    }

    /// Number of records whose status equals `status` exactly
    #[must_use]
    pub fn count_cases_by_status(&self, status: &str) -> usize {
        self.cases
            .par_iter()
            .filter(|case| case.status == status)
            .count()
    }

    /// Number of records in `zone`, any status
    #[must_use]
    pub fn count_cases_by_zone(&self, zone: &str) -> usize {
        self.cases.par_iter().filter(|case| case.in_zone(zone)).count()
    }

    /// Active counts for every zone, in [`distinct_zones`](Self::distinct_zones) order
    ///
    /// Zones without active cases are listed with 0.
    #[must_use]
    pub fn active_cases_by_zone(&self) -> Vec<(String, usize)> {
        let counts = self
            .cases
            .par_iter()
            .filter(|case| case.is_active())
            .fold(FxHashMap::<&str, usize>::default, |mut acc, case| {
                *acc.entry(case.zone.as_str()).or_insert(0) += 1;
                acc
            })
            .reduce(FxHashMap::default, |mut left, right| {
                for (zone, count) in right {
                    *left.entry(zone).or_insert(0) += count;
                }
                left
            });

        self.distinct_zones()
            .into_iter()
            .map(|zone| {
                let count = counts.get(zone.as_str()).copied().unwrap_or(0);
                (zone, count)
            })
            .collect()
    }

    /// Number of records accepted by `filter`
    #[must_use]
    pub fn count_matching(&self, filter: &dyn CaseFilter) -> usize {
        log::debug!("Counting cases matching {}", filter.describe());
        self.cases.par_iter().filter(|case| filter.matches(case)).count()
    }

    /// Records accepted by `filter`, in file order
    #[must_use]
    pub fn filter_cases(&self, filter: &dyn CaseFilter) -> Vec<&CaseRecord> {
        self.cases
            .par_iter()
            .filter(|case| filter.matches(case))
            .collect()
    }

    /// Earliest and latest reported dates, ignoring records without one
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self.cases.iter().filter_map(|case| case.date_reported).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(date) => Some((date, date)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }
}
