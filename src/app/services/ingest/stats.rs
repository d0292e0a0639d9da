//! Ingestion statistics and result structures

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Statistics for one file pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct PassStats {
    /// The data file the pass read, `None` when no file was found
    pub file: Option<PathBuf>,

    /// Lines consumed before the terminating empty line
    pub lines_read: usize,

    /// Lines that decoded into a record and were applied to the graph
    pub records_ingested: usize,

    /// Non-empty lines rejected by the decoder (wrong length, wrong tag,
    /// invalid calendar date)
    pub lines_skipped: usize,
}

/// Statistics for a complete ingestion run
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestStats {
    /// Postal code metadata pass (`PCF_*.dat`)
    pub postal_code_pass: PassStats,

    /// Basic address pass (`BAF_*.dat`)
    pub basic_address_pass: PassStats,

    /// Wall-clock duration of the whole build
    pub load_duration: Duration,
}

impl IngestStats {
    /// Total lines consumed across both passes
    pub fn total_lines_read(&self) -> usize {
        self.postal_code_pass.lines_read + self.basic_address_pass.lines_read
    }

    /// Total records applied to the graph across both passes
    pub fn total_records_ingested(&self) -> usize {
        self.postal_code_pass.records_ingested + self.basic_address_pass.records_ingested
    }

    /// Total lines the decoder rejected across both passes
    pub fn total_lines_skipped(&self) -> usize {
        self.postal_code_pass.lines_skipped + self.basic_address_pass.lines_skipped
    }
}
