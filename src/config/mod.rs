//! Configuration for the case reader.

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CaseDataError, Result};
use crate::utils::date::DateFormatConfig;

/// Environment variable holding the dataset location
pub const DATA_PATH_ENV: &str = "CASE_DATA_PATH";
/// Environment variable selecting the malformed-row policy (`skip` or `abort`)
pub const MALFORMED_ROWS_ENV: &str = "CASE_MALFORMED_ROWS";
/// Environment variable overriding the CSV delimiter (single ASCII character)
pub const DELIMITER_ENV: &str = "CASE_CSV_DELIMITER";

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/covid19dataexport.csv";

/// What to do with a row that cannot be turned into a case record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedRowPolicy {
    /// Log the row and keep loading
    #[default]
    Skip,
    /// Fail the whole load
    Abort,
}

impl FromStr for MalformedRowPolicy {
    type Err = CaseDataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(CaseDataError::Config(format!(
                "unknown malformed row policy '{other}', expected 'skip' or 'abort'"
            ))),
        }
    }
}

/// Configuration for loading case records
#[derive(Debug, Clone)]
pub struct CaseReaderConfig {
    /// Path to the CSV export
    pub data_path: PathBuf,
    /// Field delimiter
    pub delimiter: u8,
    /// Handling of rows with missing or invalid fields
    pub malformed_row_policy: MalformedRowPolicy,
    /// Show a spinner while loading
    pub show_progress: bool,
    /// Accepted formats for the reported date column
    pub date_format_config: DateFormatConfig,
}

impl Default for CaseReaderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            delimiter: b',',
            malformed_row_policy: MalformedRowPolicy::default(),
            show_progress: false,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl CaseReaderConfig {
    /// Configuration for a specific file, defaults otherwise
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from the process environment
    ///
    /// Unset variables keep their defaults. Invalid values are reported
    /// through the returned error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            config.data_path = PathBuf::from(path);
        }

        if let Ok(policy) = std::env::var(MALFORMED_ROWS_ENV) {
            config.malformed_row_policy = policy.parse()?;
        }

        if let Ok(delimiter) = std::env::var(DELIMITER_ENV) {
            config.delimiter = parse_delimiter(&delimiter)?;
        }

        Ok(config)
    }
}

fn parse_delimiter(value: &str) -> Result<u8> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if value == "\\t" => Ok(b'\t'),
        _ => Err(CaseDataError::Config(format!(
            "delimiter must be a single ASCII character, got '{value}'"
        ))),
    }
}
