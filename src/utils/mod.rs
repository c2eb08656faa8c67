//! Utility functions shared by the reader and the engine

pub mod date;
pub mod logging;

pub use date::{DateFormatConfig, parse_date_string};
pub use logging::{log_load_complete, log_load_start, log_skipped_rows};
