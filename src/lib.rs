//! Posti Processor Library
//!
//! A Rust library for building an in-memory model of Finnish postal codes,
//! municipalities and administrative regions from the fixed-width data files
//! published by Posti (the Finnish postal service).
//!
//! This library provides tools for:
//! - Decoding the 220-character `PONOT` postal code metadata records and the
//!   256-character `KATUN` basic address records (Latin-1, fixed offsets)
//! - Deduplicating regions, municipalities and postal codes into a single
//!   cross-referenced entity graph with get-or-create semantics
//! - Correcting inconsistent odd/even street number ranges and estimating
//!   the number of deliverable addresses per range
//! - Ranking municipalities per postal code (and vice versa) for reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod ingest;
        pub mod record_decoder;
        pub mod registry;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    AdministrativeRegion, Municipality, Parity, PostalCodeLocation, PostalCodeType, RegionLink,
    StreetAddressRange,
};
pub use app::services::ingest::{IngestPipeline, IngestStats};
pub use app::services::registry::PostalCodeRegistry;
pub use config::Config;

/// Result type alias for the Posti processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Posti data processing operations
///
/// Malformed *data* never surfaces here: wrong-length lines, bad tags and
/// unparseable sub-fields degrade the record instead (see the decoder
/// contract). These variants cover resource and configuration failures only.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File discovery failed (bad glob pattern or unreadable directory)
    #[error("File discovery error: {message}")]
    FileDiscovery { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization error
    #[error("Report serialization error: {message}")]
    ReportSerialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file discovery error
    pub fn file_discovery(message: impl Into<String>) -> Self {
        Self::FileDiscovery {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a report serialization error
    pub fn report_serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportSerialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
