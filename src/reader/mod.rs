//! Reading case exports into memory.
//!
//! The whole file is parsed in one pass into a `Vec<CaseRecord>` kept in
//! file order. Rows that cannot be converted are handled according to the
//! configured [`MalformedRowPolicy`].

mod columns;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use csv::StringRecord;

use crate::config::{CaseReaderConfig, MalformedRowPolicy};
use crate::error::util::safe_open_file;
use crate::error::{CaseDataError, Result};
use crate::models::CaseRecord;
use crate::utils::logging::progress::{create_spinner, finish_progress_bar};
use crate::utils::logging::{log_load_complete, log_load_start, log_skipped_rows};

pub use columns::ColumnLayout;

/// Number of skipped rows logged individually before switching to a summary
const MAX_LOGGED_SKIPS: usize = 10;

/// Rows between spinner updates
const PROGRESS_STEP: usize = 10_000;

/// Outcome of a dataset load
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Where the rows came from
    pub source: PathBuf,
    /// Data rows seen, excluding the header
    pub rows_read: usize,
    /// Rows turned into case records
    pub records_loaded: usize,
    /// Rows dropped as malformed
    pub rows_skipped: usize,
    /// Wall time spent loading
    pub elapsed: Duration,
}

/// Read all case records from the file named in the configuration
///
/// # Errors
/// Returns an error if the file is missing or unreadable, the header lacks a
/// required column, or a row is malformed under [`MalformedRowPolicy::Abort`].
pub fn read_cases(config: &CaseReaderConfig) -> Result<(Vec<CaseRecord>, LoadReport)> {
    let path = config.data_path.as_path();
    log_load_start(path);

    let file = safe_open_file(path, "loading case records")?;
    let (cases, report) = read_cases_from_reader(file, config, path)?;

    log_load_complete(&report);
    Ok((cases, report))
}

/// Read case records from any byte source
///
/// `source` only labels the data in logs and in the returned report.
pub fn read_cases_from_reader<R: Read>(
    reader: R,
    config: &CaseReaderConfig,
    source: &Path,
) -> Result<(Vec<CaseRecord>, LoadReport)> {
    let start = Instant::now();

    let mut data = Vec::new();
    let mut reader = reader;
    reader
        .read_to_end(&mut data)
        .map_err(|e| CaseDataError::io(source, e))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    let layout = ColumnLayout::from_headers(csv_reader.headers()?)?;
    log::debug!("Resolved column layout for {}: {layout:?}", source.display());

    let spinner = config
        .show_progress
        .then(|| create_spinner(Some("loading case records")));

    let mut cases = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;
    let mut record = StringRecord::new();

    loop {
        let fallback_line = csv_reader.position().line();

        let outcome = match csv_reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                rows_read += 1;
                layout
                    .parse_record(&record, rows_read, &config.date_format_config)
                    .map_err(|reason| (record.position().cloned(), reason))
            }
            Err(err) if err.is_io_error() => {
                return Err(match err.into_kind() {
                    csv::ErrorKind::Io(source_err) => CaseDataError::io(source, source_err),
                    other => CaseDataError::Config(format!("unexpected CSV error: {other:?}")),
                });
            }
            Err(err) => {
                rows_read += 1;
                Err((err.position().cloned(), err.to_string()))
            }
        };

        match outcome {
            Ok(case) => cases.push(case),
            Err((position, reason)) => {
                let line = position.map_or(fallback_line, |pos| record_line(&data, &pos));
                match config.malformed_row_policy {
                    MalformedRowPolicy::Abort => {
                        if let Some(pb) = &spinner {
                            pb.abandon();
                        }
                        return Err(CaseDataError::MalformedRow { line, reason });
                    }
                    MalformedRowPolicy::Skip => {
                        rows_skipped += 1;
                        if rows_skipped <= MAX_LOGGED_SKIPS {
                            log::warn!("Skipping malformed row at line {line}: {reason}");
                        }
                    }
                }
            }
        }

        if let Some(pb) = &spinner {
            if rows_read % PROGRESS_STEP == 0 {
                pb.set_position(rows_read as u64);
            }
        }
    }

    log_skipped_rows(source, rows_skipped, MAX_LOGGED_SKIPS);

    if let Some(pb) = &spinner {
        pb.set_position(rows_read as u64);
        finish_progress_bar(pb, Some("done"));
    }

    let report = LoadReport {
        source: source.to_path_buf(),
        rows_read,
        records_loaded: cases.len(),
        rows_skipped,
        elapsed: start.elapsed(),
    };

    Ok((cases, report))
}

/// Line on which a record's content starts
///
/// Record positions point just past the previous record, ahead of any blank
/// lines the reader skipped and, for CRLF input, ahead of the previous `\n`.
fn record_line(data: &[u8], position: &csv::Position) -> u64 {
    let start = usize::try_from(position.byte())
        .unwrap_or(data.len())
        .min(data.len());
    let newlines = data[start..]
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .filter(|b| **b == b'\n')
        .count();
    position.line() + newlines as u64
}
