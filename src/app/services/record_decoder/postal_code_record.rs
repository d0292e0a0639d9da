//! `PONOT` postal code metadata record decoding
//!
//! One record describes one (postal code, municipality) pair together with
//! the administrative region of the municipality. Offsets per the Posti
//! postal code file description, record length 220.

use super::fields::{DateField, date_field, field, numeric_field, trimmed_field};
use crate::app::models::{LanguageDistributionCode, PostalCodeType};
use crate::constants::{POSTAL_CODE_RECORD_LENGTH, POSTAL_CODE_RECORD_TAG};
use chrono::NaiveDate;

/// A decoded postal code metadata record
#[derive(Debug, Clone, PartialEq)]
pub struct PostalCodeRecord {
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

    /// Administrative region code
    pub region_code: String,

    /// Region name in Finnish
    pub region_name_fi: String,

    /// Region name in Swedish
    pub region_name_sv: String,

    /// Municipality code (3 characters)
    pub municipality_code: String,

    /// Municipality name in Finnish
    pub municipality_name_fi: String,

    /// Municipality name in Swedish
    pub municipality_name_sv: String,

    /// Official language distribution of the municipality
    pub language_distribution: Option<LanguageDistributionCode>,
}

impl PostalCodeRecord {
    /// Decode one line of the postal code metadata file.
    ///
    /// Returns `None` when the line is not a decodable data record: wrong
    /// length, wrong leading tag, or a date whose components parse but do
    /// not form a valid calendar date.
    pub fn decode(line: &str) -> Option<Self> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != POSTAL_CODE_RECORD_LENGTH {
            return None;
        }
        if field(&chars, 0..5) != POSTAL_CODE_RECORD_TAG {
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

        Some(Self {
            running_date,
            postal_code: field(&chars, 13..18),
            name_fi: trimmed_field(&chars, 18..48),
            name_sv: trimmed_field(&chars, 48..78),
            abbreviation_fi: trimmed_field(&chars, 78..90),
            abbreviation_sv: trimmed_field(&chars, 90..102),
            entry_into_force,
            type_code: numeric_field(&chars, 110..111).and_then(PostalCodeType::from_code),
            region_code: trimmed_field(&chars, 111..116),
            region_name_fi: trimmed_field(&chars, 116..146),
            region_name_sv: trimmed_field(&chars, 146..176),
            municipality_code: field(&chars, 176..179),
            municipality_name_fi: trimmed_field(&chars, 179..199),
            municipality_name_sv: trimmed_field(&chars, 199..219),
            language_distribution: numeric_field(&chars, 219..220)
                .and_then(LanguageDistributionCode::from_code),
        })
    }
}
