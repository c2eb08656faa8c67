//! Command-line interface argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Load a case export once and print aggregate case counts
///
/// Examples:
///   case-reader data/covid19dataexport.csv
///   case-reader --json
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV export to load
    ///
    /// Falls back to the default data path when neither the argument nor
    /// the environment variable is set.
    #[arg(value_name = "PATH", env = "CASE_DATA_PATH")]
    pub path: Option<PathBuf>,

    /// Print the statistics as JSON instead of a text summary
    #[arg(long)]
    pub json: bool,
}
