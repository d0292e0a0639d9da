//! Command-line argument definitions for the Posti processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Posti postal code data processor
///
/// Builds a deduplicated, cross-referenced model of Finnish postal codes,
/// municipalities and administrative regions from Posti's fixed-width
/// PCF/BAF data files and reports on it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "posti-processor",
    version,
    about = "Build a cross-referenced model of Finnish postal codes from Posti's PCF/BAF data files",
    long_about = "Reads the fixed-width, Latin-1 encoded postal code metadata file (PCF_*.dat) \
                  and basic address file (BAF_*.dat) published by Posti, builds an in-memory \
                  entity graph of regions, municipalities, postal codes and street address \
                  ranges, and renders deterministic multi-level reports from it."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the Posti processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render the region/municipality/postal code report (main command)
    Report(ReportArgs),
    /// Summarize the ingested data set
    Stats(StatsArgs),
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Directory containing the Posti data files
    ///
    /// Should contain the newest PCF_{yyyymmdd}.dat and BAF_{yyyymmdd}.dat
    /// files. If not specified, the platform data directory is used.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory containing the PCF_*.dat and BAF_*.dat data files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Include special postal codes in the report
    ///
    /// By default only ordinary geographic area codes are reported; this
    /// flag also includes PO boxes, corporate codes and other special codes.
    #[arg(
        long = "include-special",
        help = "Include special postal codes (PO boxes, corporate codes, ...)"
    )]
    pub include_special: bool,

    /// Output format for the report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, the report goes to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Directory containing the Posti data files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Directory containing the PCF_*.dat and BAF_*.dat data files"
    )]
    pub data_dir: Option<PathBuf>,

    /// Output format for the summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(&self.data_dir)?;

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// The data directory to read, falling back to the configured default
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(config::default_data_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl StatsArgs {
    /// Validate the stats command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_data_dir(&self.data_dir)
    }

    /// The data directory to read, falling back to the configured default
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(config::default_data_dir)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Validate an explicitly provided data directory
fn validate_data_dir(data_dir: &Option<PathBuf>) -> Result<()> {
    if let Some(data_dir) = data_dir {
        if !data_dir.exists() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                data_dir.display()
            )));
        }

        if !data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data path is not a directory: {}",
                data_dir.display()
            )));
        }
    }

    Ok(())
}
