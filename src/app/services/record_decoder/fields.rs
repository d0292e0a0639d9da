//! Field extraction utilities for fixed-width records
//!
//! This module provides helper functions for slicing a record line at fixed
//! character offsets and parsing numeric and date sub-fields with
//! fallback-to-default error handling.

use chrono::NaiveDate;
use std::ops::Range;

/// Extract a field exactly as it appears in the line, spacing included.
///
/// Offsets are character offsets, not byte offsets: the input files are
/// Latin-1 and the decoded names contain non-ASCII letters.
pub fn field(chars: &[char], range: Range<usize>) -> String {
    chars[range].iter().collect()
}

/// Extract a field with surrounding whitespace removed
pub fn trimmed_field(chars: &[char], range: Range<usize>) -> String {
    field(chars, range).trim().to_string()
}

/// Parse a numeric sub-field, `None` on any malformed content
pub fn numeric_field(chars: &[char], range: Range<usize>) -> Option<u32> {
    trimmed_field(chars, range).parse().ok()
}

/// Outcome of assembling a calendar date from year/month/day sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// At least one component failed to parse; the date is simply absent
    Absent,
    /// All components parsed and form a valid calendar date
    Valid(NaiveDate),
    /// All components parsed but do not form a valid calendar date;
    /// the whole line must be rejected
    OutOfRange,
}

/// Assemble a calendar date from three numeric sub-fields.
///
/// The date exists only when year, month and day all parse; components that
/// parse into an impossible date (month 0, February 30th) make the record
/// undecodable rather than merely dateless.
pub fn date_field(
    chars: &[char],
    year: Range<usize>,
    month: Range<usize>,
    day: Range<usize>,
) -> DateField {
    let (Some(year), Some(month), Some(day)) = (
        numeric_field(chars, year),
        numeric_field(chars, month),
        numeric_field(chars, day),
    ) else {
        return DateField::Absent;
    };

    match NaiveDate::from_ymd_opt(year as i32, month, day) {
        Some(date) => DateField::Valid(date),
        None => DateField::OutOfRange,
    }
}
