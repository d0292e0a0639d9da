//! Command implementations for the Posti processor CLI
//!
//! This module contains the command execution logic and error handling for
//! the CLI interface. Each command is implemented in its own module.

pub mod report;
pub mod shared;
pub mod stats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the Posti processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `report`: multi-level region/municipality/postal code report
/// - `stats`: ingestion and entity graph summary
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Report(report_args) => report::run_report(report_args),
        Commands::Stats(stats_args) => stats::run_stats(stats_args),
    }
}
