//! Checks against the full provincial export.
//!
//! The export is not checked in. Point `CASE_REFERENCE_DATA` at it (or place
//! it at the default data path) to run these; otherwise they pass without
//! asserting anything.

use case_reader::{CaseAggregationEngine, CaseReaderConfig};

use crate::utils::reference_data_path;

fn reference_engine() -> Option<CaseAggregationEngine> {
    let Some(path) = reference_data_path() else {
        println!("Reference export not found, skipping");
        return None;
    };
    Some(CaseAggregationEngine::load(&CaseReaderConfig::with_path(path)).unwrap())
}

#[test]
fn test_reference_totals() {
    let Some(engine) = reference_engine() else {
        return;
    };

    assert_eq!(engine.all_cases().len(), 436_495);
    assert_eq!(engine.count_total_active_cases(), 64_129);
}

#[test]
fn test_reference_zone_counts() {
    let Some(engine) = reference_engine() else {
        return;
    };

    assert_eq!(engine.count_active_cases_by_zone("Calgary Zone"), 29_544);
    assert_eq!(engine.count_active_cases_by_zone("Edmonton Zone"), 24_062);
    assert_eq!(engine.count_active_cases_by_zone("Nonexistent Zone"), 0);

    let zones = engine.distinct_zones();
    zones.iter().for_each(|zone| println!("{zone}"));
    assert_eq!(zones.len(), 6);
}
