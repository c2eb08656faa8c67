use std::collections::HashSet;

use case_reader::{CaseAggregationEngine, CaseReaderConfig, CaseStatistics, FilterBuilder};

use crate::utils::{STATUSES, ZONES, random_records, to_export_rows, write_export};

fn random_engine(seed: u64, count: usize) -> CaseAggregationEngine {
    CaseAggregationEngine::from_records(random_records(seed, count))
}

#[test]
fn test_zone_counts_never_exceed_total() {
    for seed in 0..5 {
        let engine = random_engine(seed, 2_000);
        let total_active = engine.count_total_active_cases();

        for zone in ZONES.iter().chain(["Nonexistent Zone"].iter()) {
            assert!(engine.count_active_cases_by_zone(zone) <= total_active);
        }
        assert_eq!(engine.count_active_cases_by_zone("Nonexistent Zone"), 0);
    }
}

#[test]
fn test_zone_counts_partition_active_cases() {
    let engine = random_engine(7, 5_000);

    let by_zone = engine.active_cases_by_zone();
    let sum: usize = by_zone.iter().map(|(_, count)| count).sum();
    assert_eq!(sum, engine.count_total_active_cases());

    for (zone, count) in by_zone {
        assert_eq!(count, engine.count_active_cases_by_zone(&zone));
    }
}

#[test]
fn test_status_counts_cover_every_record() {
    let engine = random_engine(11, 3_000);
    let sum: usize = STATUSES
        .iter()
        .map(|status| engine.count_cases_by_status(status))
        .sum();
    assert_eq!(sum, engine.len());
}

#[test]
fn test_distinct_zones_round_trip() {
    let engine = random_engine(3, 1_000);
    let zones = engine.distinct_zones();

    let unique: HashSet<&String> = zones.iter().collect();
    assert_eq!(unique.len(), zones.len());

    let seen: HashSet<&String> = engine.all_cases().iter().map(|c| &c.zone).collect();
    assert_eq!(unique, seen);
}

#[test]
fn test_distinct_zones_in_first_seen_order() {
    let engine = random_engine(5, 1_000);

    let mut expected: Vec<String> = Vec::new();
    for case in engine.all_cases() {
        if !expected.contains(&case.zone) {
            expected.push(case.zone.clone());
        }
    }

    assert_eq!(engine.distinct_zones(), expected);
    assert_eq!(engine.distinct_zones(), engine.distinct_zones());
}

#[test]
fn test_loaded_file_matches_in_memory_records() {
    let records = random_records(21, 1_500);
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path(), &to_export_rows(&records));

    let loaded = CaseAggregationEngine::load(&CaseReaderConfig::with_path(&path)).unwrap();
    let in_memory = CaseAggregationEngine::from_records(records);

    assert_eq!(loaded.len(), in_memory.len());
    assert_eq!(
        loaded.count_total_active_cases(),
        in_memory.count_total_active_cases()
    );
    assert_eq!(loaded.distinct_zones(), in_memory.distinct_zones());
    assert_eq!(loaded.active_cases_by_zone(), in_memory.active_cases_by_zone());
}

#[test]
fn test_filtered_count_matches_direct_query() {
    let engine = random_engine(13, 2_500);
    for zone in ZONES {
        let filter = FilterBuilder::new().active().zone(*zone).build();
        assert_eq!(
            engine.count_matching(&filter),
            engine.count_active_cases_by_zone(zone)
        );
        assert_eq!(
            engine.filter_cases(&filter).len(),
            engine.count_matching(&filter)
        );
    }
}

#[test]
fn test_statistics_agree_with_engine() {
    let engine = random_engine(17, 2_000);
    let stats = CaseStatistics::calculate(&engine);

    assert_eq!(stats.total_cases, engine.len());
    assert_eq!(stats.active_cases, engine.count_total_active_cases());
    assert_eq!(
        stats.active_cases + stats.recovered_cases + stats.died_cases,
        engine.len()
    );
    assert_eq!(stats.zone_count(), engine.distinct_zones().len());
}
