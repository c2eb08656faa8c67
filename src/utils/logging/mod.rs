//! Logging utilities for output and progress tracking
//!
//! This module provides utilities for logging and progress tracking while
//! a dataset is being loaded.

pub mod log;
pub mod progress;

pub use log::{log_load_complete, log_load_start, log_skipped_rows};
pub use progress::{create_spinner, finish_progress_bar};
