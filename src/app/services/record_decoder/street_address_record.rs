//! `KATUN` basic address record decoding
//!
//! One record describes one odd/even street number range (or a named
//! location without numbers) within one municipality for one postal code.
//! Offsets per the Posti basic address file description, record length 256.
//!
//! The street name field (102-132) overlaps the entry-into-force date and
//! type code offsets shared with the metadata format; the source format
//! defines both views over the same columns and both are extracted here.

use super::fields::{DateField, date_field, field, numeric_field, trimmed_field};
use crate::app::models::{Parity, PostalCodeType};
use crate::constants::{BASIC_ADDRESS_RECORD_LENGTH, BASIC_ADDRESS_RECORD_TAG};
use chrono::NaiveDate;

/// A decoded basic address record
#[derive(Debug, Clone, PartialEq)]
pub struct StreetAddressRecord {
    /// Snapshot date of the data file
    pub running_date: Option<NaiveDate>,

    /// The postal code (5 characters, leading zeros significant)
    pub postal_code: String,

    /// Postal code location name in Finnish
    pub name_fi: String,

    /// Postal code location name in Swedish
    pub name_sv: String,

    /// Abbreviated location name in Finnish
    pub abbreviation_fi: String,

    /// Abbreviated location name in Swedish
    pub abbreviation_sv: String,

    /// The date the postal code was first taken into use
    pub entry_into_force: Option<NaiveDate>,

    /// Type of the postal code
    pub type_code: Option<PostalCodeType>,

    /// Street or location name in Finnish
    pub street_name_fi: String,

    /// Street or location name in Swedish
    pub street_name_sv: String,

    /// Whether the record covers odd or even street numbers
    pub parity: Parity,

    /// Smallest building number of the range, 0 when absent or malformed
    pub smallest_number: u32,

    /// Highest building number of the range, 0 when absent or malformed
    pub highest_number: u32,

    /// Raw begin/end address range tokens (0-2 elements)
    pub address_range: Vec<String>,

    /// Municipality code (3 characters)
    pub municipality_code: String,

    /// Municipality name in Finnish, spacing preserved as in the file
    pub municipality_name_fi: String,

    /// Municipality name in Swedish, spacing preserved as in the file
    pub municipality_name_sv: String,
}

impl StreetAddressRecord {
    /// Decode one line of the basic address file.
    ///
    /// Returns `None` when the line is not a decodable data record: wrong
    /// length, wrong leading tag, or a date whose components parse but do
    /// not form a valid calendar date.
    pub fn decode(line: &str) -> Option<Self> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != BASIC_ADDRESS_RECORD_LENGTH {
            return None;
        }
        if field(&chars, 0..5) != BASIC_ADDRESS_RECORD_TAG {
            return None;
        }

        let running_date = match date_field(&chars, 5..9, 9..11, 11..13) {
            DateField::Valid(date) => Some(date),
            DateField::Absent => None,
            DateField::OutOfRange => return None,
        };
        let entry_into_force = match date_field(&chars, 102..106, 106..108, 108..110) {
            DateField::Valid(date) => Some(date),
            DateField::Absent => None,
            DateField::OutOfRange => return None,
        };

        let parity = numeric_field(&chars, 186..187)
            .map(Parity::from_code)
            .unwrap_or(Parity::None);

        // A building number is five digits, an optional delivery letter, a
        // punctuation mark and an optional secondary number with its own
        // letter ("1a-5b"). Only the numeric tokens count; the rest is
        // carried verbatim in the range tokens.
        let smallest_primary = trimmed_field(&chars, 187..192);
        let smallest_letter_1 = trimmed_field(&chars, 192..193);
        let smallest_punctuation = trimmed_field(&chars, 193..194);
        let smallest_secondary = trimmed_field(&chars, 194..199);
        let smallest_letter_2 = trimmed_field(&chars, 199..200);
        let smallest_number = smallest_primary.parse().unwrap_or(0);

        let highest_primary = trimmed_field(&chars, 200..205);
        let highest_letter_1 = trimmed_field(&chars, 205..206);
        let highest_punctuation = trimmed_field(&chars, 206..207);
        let highest_secondary = trimmed_field(&chars, 207..212);
        let highest_letter_2 = trimmed_field(&chars, 212..213);

        // The upper bound of a dashed range lives in the secondary token;
        // otherwise (and when the secondary token is unusable) the primary
        // token is the upper bound.
        let mut highest_number: u32 = 0;
        if highest_punctuation == "-" {
            highest_number = highest_secondary.parse().unwrap_or(0);
        }
        if highest_number == 0 {
            highest_number = highest_primary.parse().unwrap_or(0);
        }

        let range_start = format!(
            "{}{}{}{}{}",
            smallest_primary,
            smallest_letter_1,
            smallest_punctuation,
            smallest_secondary,
            smallest_letter_2
        );
        let range_end = format!(
            "{}{}{}{}{}",
            highest_primary, highest_letter_1, highest_punctuation, highest_secondary, highest_letter_2
        );
        let address_range = if range_start.is_empty() {
            Vec::new()
        } else if range_end.is_empty() || range_end == range_start {
            vec![range_start]
        } else {
            vec![range_start, range_end]
        };

        Some(Self {
            running_date,
            postal_code: field(&chars, 13..18),
            name_fi: trimmed_field(&chars, 18..48),
            name_sv: trimmed_field(&chars, 48..78),
            abbreviation_fi: trimmed_field(&chars, 78..90),
            abbreviation_sv: trimmed_field(&chars, 90..102),
            entry_into_force,
            type_code: numeric_field(&chars, 110..111).and_then(PostalCodeType::from_code),
            street_name_fi: trimmed_field(&chars, 102..132),
            street_name_sv: trimmed_field(&chars, 132..162),
            parity,
            smallest_number,
            highest_number,
            address_range,
            municipality_code: field(&chars, 213..216),
            municipality_name_fi: field(&chars, 216..236),
            municipality_name_sv: field(&chars, 236..256),
        })
    }
}
