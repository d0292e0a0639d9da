//! Fixed-width record decoder for Posti data files
//!
//! This module decodes the two record families of the postal code data set:
//! the 220-character `PONOT` postal code metadata records and the
//! 256-character `KATUN` basic address records. Fields live at fixed
//! character offsets; there are no delimiters.
//!
//! ## Architecture
//!
//! The decoder is organized into logical components:
//! - [`fields`] - Character-offset field extraction and fallible sub-field parsing
//! - [`postal_code_record`] - `PONOT` record decoding
//! - [`street_address_record`] - `KATUN` record decoding
//!
//! ## Decoding contract
//!
//! A decoder returns `None` ("not a data record") when the line is empty,
//! has the wrong length, carries the wrong leading tag, or contains a date
//! whose components parse but do not form a valid calendar date. A numeric
//! or date sub-field that fails to parse never rejects the line: the
//! corresponding attribute falls back to `None` or zero instead.

pub mod fields;
pub mod postal_code_record;
pub mod street_address_record;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use postal_code_record::PostalCodeRecord;
pub use street_address_record::StreetAddressRecord;
