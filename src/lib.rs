//! A Rust library for loading case record exports once and answering
//! aggregate queries (counts, distinct values, filtered counts) over them.

pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod models;
pub mod reader;
pub mod statistics;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{CaseReaderConfig, MalformedRowPolicy};
pub use engine::CaseAggregationEngine;
pub use error::{CaseDataError, Result};
pub use models::{ACTIVE_STATUS, CaseRecord};
pub use reader::{LoadReport, read_cases, read_cases_from_reader};
pub use statistics::CaseStatistics;

// Filtering capabilities
pub use filter::{CaseFilter, FilterBuilder};
