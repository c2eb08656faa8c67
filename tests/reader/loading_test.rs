use case_reader::{
    CaseAggregationEngine, CaseDataError, CaseReaderConfig, MalformedRowPolicy, read_cases,
};

use crate::utils::{export_row, write_export};

#[test]
fn test_load_counts_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let rows: Vec<String> = (1..=25)
        .map(|id| export_row(id, "2020-11-02", "Calgary Zone", "Recovered"))
        .collect();
    let path = write_export(dir.path(), &rows);

    let (cases, report) = read_cases(&CaseReaderConfig::with_path(&path)).unwrap();
    assert_eq!(cases.len(), 25);
    assert_eq!(report.rows_read, 25);
    assert_eq!(report.rows_skipped, 0);
    assert_eq!(report.source, path);
    assert_eq!(cases[24].case_id, "25");
}

#[test]
fn test_skipped_rows_are_excluded_from_engine() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        export_row(1, "2020-11-02", "Calgary Zone", "Active"),
        export_row(2, "2020-11-02", "Calgary Zone", ""),
        export_row(3, "not-a-date", "Edmonton Zone", "Active"),
        "\"4\",2020-11-02".to_string(),
        export_row(5, "", "Edmonton Zone", "Active"),
    ];
    let path = write_export(dir.path(), &rows);

    let engine = CaseAggregationEngine::load(&CaseReaderConfig::with_path(&path)).unwrap();
    let report = engine.load_report();

    assert_eq!(report.rows_read, 5);
    assert_eq!(report.rows_skipped, 3);
    assert_eq!(report.rows_read, report.records_loaded + report.rows_skipped);
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.count_total_active_cases(), 2);
    assert_eq!(engine.all_cases()[1].date_reported, None);
}

#[test]
fn test_abort_policy_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec![
        export_row(1, "2020-11-02", "Calgary Zone", "Active"),
        export_row(2, "2020-11-02", "", "Active"),
    ];
    let path = write_export(dir.path(), &rows);
    let config = CaseReaderConfig {
        malformed_row_policy: MalformedRowPolicy::Abort,
        ..CaseReaderConfig::with_path(&path)
    };

    let err = CaseAggregationEngine::load(&config).unwrap_err();
    assert!(matches!(err, CaseDataError::MalformedRow { line: 3, .. }));
}

#[test]
fn test_missing_required_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.csv");
    std::fs::write(&path, "id,zone,date\n1,Calgary Zone,2020-11-02\n").unwrap();

    let err = read_cases(&CaseReaderConfig::with_path(&path)).unwrap_err();
    assert!(matches!(err, CaseDataError::MissingColumn(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let err = CaseAggregationEngine::load(&CaseReaderConfig::with_path(&path)).unwrap_err();
    assert!(matches!(err, CaseDataError::NotFound(p) if p == path));
}
