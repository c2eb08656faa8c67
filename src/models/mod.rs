//! Domain models
//!
//! This module contains the record types produced by the reader and
//! consumed by the aggregation engine.

pub mod case;

pub use case::{ACTIVE_STATUS, CaseRecord, DIED_STATUS, RECOVERED_STATUS};
