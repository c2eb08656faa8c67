//! Load logging
//!
//! Messages written while a case export is read, built from the
//! [`LoadReport`] the reader produces.

use std::path::Path;

use crate::reader::LoadReport;

/// Log the start of a load
pub fn log_load_start(path: &Path) {
    log::info!("Loading case records from {}", path.display());
}

/// Log a finished load, at `warn` when rows were dropped
pub fn log_load_complete(report: &LoadReport) {
    let message = load_summary(report);
    if report.rows_skipped > 0 {
        log::warn!("{message}");
    } else {
        log::info!("{message}");
    }
}

/// Log the total of skipped rows once the per-row warnings have stopped
///
/// `logged` is how many rows were already reported one by one.
pub fn log_skipped_rows(source: &Path, skipped: usize, logged: usize) {
    if skipped > logged {
        log::warn!(
            "Skipped {skipped} malformed rows in {} ({} not logged individually)",
            source.display(),
            skipped - logged
        );
    }
}

fn load_summary(report: &LoadReport) -> String {
    let mut message = format!(
        "Loaded {} of {} rows from {} in {:?}",
        report.records_loaded,
        report.rows_read,
        report.source.display(),
        report.elapsed
    );
    if report.rows_skipped > 0 {
        message.push_str(&format!(", {} malformed rows skipped", report.rows_skipped));
    }
    message
}
