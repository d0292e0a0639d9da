//! Configuration management and validation.
//!
//! Provides the configuration structure for data file location and
//! report options, with sensible defaults for unconfigured runs.

use crate::constants::APP_DIR_NAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Processor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the `PCF_*.dat` and `BAF_*.dat` data files
    pub data_dir: PathBuf,

    /// Include special postal codes (PO boxes, corporate codes, ...) in
    /// reports instead of only ordinary geographic area codes
    pub include_special: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            include_special: false,
        }
    }
}

impl Config {
    /// Create a configuration for a specific data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.data_dir.exists() {
            return Err(Error::configuration(format!(
                "Data directory does not exist: {}",
                self.data_dir.display()
            )));
        }

        if !self.data_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Data path is not a directory: {}",
                self.data_dir.display()
            )));
        }

        Ok(())
    }
}

/// Default data directory: `<platform data dir>/posti-processor/data`,
/// falling back to `./data` when the platform directory cannot be resolved.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join("data"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
