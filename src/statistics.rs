//! Case statistics and summaries
//!
//! This module snapshots the engine's aggregate queries into a single
//! serializable value and renders it as a text report.

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::CaseAggregationEngine;
use crate::models::{ACTIVE_STATUS, DIED_STATUS, RECOVERED_STATUS};

/// Active count for one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneCount {
    /// Zone label
    pub zone: String,
    /// Active cases in the zone
    pub active: usize,
    /// All cases in the zone
    pub total: usize,
}

/// Structure containing basic case statistics
#[derive(Debug, Clone, Serialize)]
pub struct CaseStatistics {
    /// Total number of loaded records
    pub total_cases: usize,
    /// Records with status "Active"
    pub active_cases: usize,
    /// Records with status "Recovered"
    pub recovered_cases: usize,
    /// Records with status "Died"
    pub died_cases: usize,
    /// Per-zone counts, in first-seen zone order
    pub zones: Vec<ZoneCount>,
    /// Earliest reported date
    pub first_reported: Option<NaiveDate>,
    /// Latest reported date
    pub last_reported: Option<NaiveDate>,
    /// Rows dropped while loading
    pub rows_skipped: usize,
}

impl CaseStatistics {
    /// Calculate statistics for a loaded engine
    #[must_use]
    pub fn calculate(engine: &CaseAggregationEngine) -> Self {
        let zones = engine
            .active_cases_by_zone()
            .into_iter()
            .map(|(zone, active)| {
                let total = engine.count_cases_by_zone(&zone);
                ZoneCount {
                    zone,
                    active,
                    total,
                }
            })
            .collect();

        let (first_reported, last_reported) = engine
            .date_range()
            .map_or((None, None), |(first, last)| (Some(first), Some(last)));

        Self {
            total_cases: engine.len(),
            active_cases: engine.count_cases_by_status(ACTIVE_STATUS),
            recovered_cases: engine.count_cases_by_status(RECOVERED_STATUS),
            died_cases: engine.count_cases_by_status(DIED_STATUS),
            zones,
            first_reported,
            last_reported,
            rows_skipped: engine.load_report().rows_skipped,
        }
    }

    /// Number of distinct zones
    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Generate a text summary
    #[must_use]
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Case Summary:\n");
        summary.push_str(&format!("  Total Cases: {}\n", self.total_cases));
        summary.push_str(&format!("  Active Cases: {}\n", self.active_cases));
        summary.push_str(&format!("  Recovered Cases: {}\n", self.recovered_cases));
        summary.push_str(&format!("  Deaths: {}\n", self.died_cases));

        if let (Some(first), Some(last)) = (self.first_reported, self.last_reported) {
            summary.push_str(&format!("  Reported Between: {first} and {last}\n"));
        }

        if self.rows_skipped > 0 {
            summary.push_str(&format!("  Malformed Rows Skipped: {}\n", self.rows_skipped));
        }

        summary.push_str(&format!("\nActive Cases by Zone ({} zones):\n", self.zone_count()));
        for zone in &self.zones {
            let percentage = if self.active_cases > 0 {
                (zone.active as f64 / self.active_cases as f64) * 100.0
            } else {
                0.0
            };
            summary.push_str(&format!(
                "  {}: {} of {} ({percentage:.1}% of active)\n",
                zone.zone, zone.active, zone.total
            ));
        }

        summary
    }
}
