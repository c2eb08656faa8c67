//! Error handling for case loading and aggregation.

pub mod util;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Specialized error type for the case reader
#[derive(Debug, thiserror::Error)]
pub enum CaseDataError {
    /// The configured data file does not exist
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Error opening or reading a file
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error decoding the CSV stream
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the engine depends on is absent from the header row
    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    /// A single row could not be turned into a case record
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source file
        line: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// The one-time dataset load failed; every later access sees the same cause
    #[error("Case data failed to load: {0}")]
    DataLoad(Arc<CaseDataError>),
}

impl CaseDataError {
    /// Build an IO error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The innermost error, looking through `DataLoad` wrappers
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::DataLoad(inner) => inner.root_cause(),
            other => other,
        }
    }
}

/// Result type for case reader operations
pub type Result<T> = std::result::Result<T, CaseDataError>;
