//! Application constants for the Posti processor
//!
//! This module contains the record format constants, file naming patterns
//! and default values used throughout the application.

// =============================================================================
// Data File Naming
// =============================================================================

/// Glob pattern for postal code metadata files (`PCF_{yyyymmdd}.dat`)
pub const POSTAL_CODE_FILE_PATTERN: &str = "PCF_*.dat";

/// Glob pattern for basic address files (`BAF_{yyyymmdd}.dat`)
pub const BASIC_ADDRESS_FILE_PATTERN: &str = "BAF_*.dat";

// =============================================================================
// Record Formats
// =============================================================================

/// Record identifier tag opening every postal code metadata line
pub const POSTAL_CODE_RECORD_TAG: &str = "PONOT";

/// Record identifier tag opening every basic address line
pub const BASIC_ADDRESS_RECORD_TAG: &str = "KATUN";

/// Exact character length of a postal code metadata record
pub const POSTAL_CODE_RECORD_LENGTH: usize = 220;

/// Exact character length of a basic address record
pub const BASIC_ADDRESS_RECORD_LENGTH: usize = 256;

// =============================================================================
// Reporting
// =============================================================================

/// Final digits of postal codes covering ordinary geographic areas.
///
/// A handful of special codes (parliament, Santa Claus) are typed as normal
/// in the source data; they are excluded by their last digit, as ordinary
/// area codes end in 0, 5 or 7.
pub const NORMAL_POSTAL_CODE_SUFFIXES: &[char] = &['0', '5', '7'];

/// Application directory name used for the default data location
pub const APP_DIR_NAME: &str = "posti-processor";
