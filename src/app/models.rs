//! Data models for Finnish postal code processing
//!
//! This module contains the core data structures representing administrative
//! regions, municipalities, postal code locations and street address ranges,
//! following the record formats of Posti's postal code data files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Code Enumerations
// =============================================================================

/// Defines whether a street address range covers the even or the odd numbers
/// (street numbers are always odd on one side of the road and even on the
/// opposite side).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    /// The range does not have street address numbers
    #[default]
    None,
    /// The range defines odd street address numbers
    Odd,
    /// The range defines even street address numbers
    Even,
}

impl Parity {
    /// Map the raw parity code to a parity, defaulting to `None` for values
    /// outside the documented 0-2 range.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Parity::Odd,
            2 => Parity::Even,
            _ => Parity::None,
        }
    }
}

/// Type of a postal code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostalCodeType {
    /// Ordinary postal code covering a physical area on a map
    Normal,
    /// Post office box
    PoBox,
    /// Corporate postal code
    Corporate,
    /// Compilation code
    Compilation,
    /// Reply mail
    ReplyMail,
    /// Parcel machine
    ParcelMachine,
    /// Pick-up point
    PickupPoint,
    /// Technical code
    Technical,
}

impl PostalCodeType {
    /// Map the raw type code (1-8) to a postal code type
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(PostalCodeType::Normal),
            2 => Some(PostalCodeType::PoBox),
            3 => Some(PostalCodeType::Corporate),
            4 => Some(PostalCodeType::Compilation),
            5 => Some(PostalCodeType::ReplyMail),
            6 => Some(PostalCodeType::ParcelMachine),
            7 => Some(PostalCodeType::PickupPoint),
            8 => Some(PostalCodeType::Technical),
            _ => None,
        }
    }
}

/// Code defining the official language distribution of a municipality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageDistributionCode {
    /// Finnish as the only official language
    Finnish,
    /// Both Finnish and Swedish official, Finnish listed first
    BilingualFinnishFirst,
    /// Both Swedish and Finnish official, Swedish listed first
    /// (not produced by the postal data files, kept for completeness)
    BilingualSwedishFirst,
    /// Swedish as the only official language
    Swedish,
}

impl LanguageDistributionCode {
    /// Map the raw distribution code (1-4) to a classification
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(LanguageDistributionCode::Finnish),
            2 => Some(LanguageDistributionCode::BilingualFinnishFirst),
            3 => Some(LanguageDistributionCode::BilingualSwedishFirst),
            4 => Some(LanguageDistributionCode::Swedish),
            _ => None,
        }
    }
}

// =============================================================================
// Administrative Region
// =============================================================================

/// Finnish administrative region (NUTS level 3)
///
/// One instance exists per region code for the lifetime of an ingestion run;
/// attributes are fixed by the first record seen for the code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdministrativeRegion {
    /// Snapshot date of the data file the region was first seen in
    pub running_date: Option<NaiveDate>,

    /// The NUTS 3 code for the region
    pub code: String,

    /// Region name in Finnish
    pub name_fi: String,

    /// Region name in Swedish
    pub name_sv: String,
}

impl AdministrativeRegion {
    /// Create a new administrative region
    pub fn new(
        running_date: Option<NaiveDate>,
        code: String,
        name_fi: String,
        name_sv: String,
    ) -> Self {
        Self {
            running_date,
            code,
            name_fi,
            name_sv,
        }
    }
}

// =============================================================================
// Municipality
// =============================================================================

/// Reference from a municipality to its administrative region.
///
/// A municipality first encountered in the basic address file has no region
/// information; the link stays `Unknown` for the rest of the run. Once
/// `Known`, a link is never re-pointed to a different region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum RegionLink {
    /// No region information was available when the municipality was created
    #[default]
    Unknown,
    /// Region code of the owning administrative region
    Known(String),
}

impl RegionLink {
    /// The linked region code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            RegionLink::Unknown => None,
            RegionLink::Known(code) => Some(code),
        }
    }
}

/// Finnish municipality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    /// Snapshot date of the data file the municipality was first seen in
    pub running_date: Option<NaiveDate>,

    /// The administrative region the municipality belongs to
    pub region: RegionLink,

    /// The municipality code (maintained by the Digital and Population Data
    /// Services Agency)
    pub code: String,

    /// Municipality name in Finnish
    pub name_fi: String,

    /// Municipality name in Swedish
    pub name_sv: String,

    /// Official language distribution of the municipality
    pub language_distribution: Option<LanguageDistributionCode>,
}

impl Municipality {
    /// Create a new municipality
    pub fn new(
        running_date: Option<NaiveDate>,
        region: RegionLink,
        code: String,
        name_fi: String,
        name_sv: String,
        language_distribution: Option<LanguageDistributionCode>,
    ) -> Self {
        Self {
            running_date,
            region,
            code,
            name_fi,
            name_sv,
            language_distribution,
        }
    }

    /// Whether the Finnish name should be displayed before the Swedish name.
    ///
    /// True when the language distribution is unset, Finnish-only, or
    /// bilingual with Finnish listed first. The postal data files do not
    /// record the language order of bilingual municipalities, so bilingual
    /// codes from them always sort Finnish-first.
    pub fn is_finnish_name_first(&self) -> bool {
        matches!(
            self.language_distribution,
            None | Some(LanguageDistributionCode::Finnish)
                | Some(LanguageDistributionCode::BilingualFinnishFirst)
        )
    }
}

// =============================================================================
// Street Address Range
// =============================================================================

/// A single range of even or odd street numbers on a street, or a named
/// location without street numbers, within one municipality for one postal
/// code.
///
/// The constructor corrects building numbers that disagree with the declared
/// parity and computes the potential address count; the value is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetAddressRange {
    /// Snapshot date of the data file the range came from
    pub running_date: Option<NaiveDate>,

    /// Code of the municipality this range is within
    pub municipality_code: String,

    /// Street or location name in Finnish
    pub name_fi: String,

    /// Street or location name in Swedish
    pub name_sv: String,

    /// Raw begin/end address range tokens (number, delivery letter and
    /// punctuation as they appear in the file); empty when the record has no
    /// address range, one element when begin and end coincide
    pub address_range: Vec<String>,

    /// Whether the range covers odd or even street numbers
    pub parity: Parity,

    /// The smallest building number in the range, after parity correction
    pub smallest_number: u32,

    /// The highest building number in the range, after parity correction
    pub highest_number: u32,

    /// Estimated number of distinct street addresses the range could contain.
    /// An estimate only: outside city centres the covered numbers may depend
    /// on distances along the road rather than on the numeric range.
    pub potential_addresses: u32,
}

impl StreetAddressRange {
    /// Create a new street address range, correcting building numbers that
    /// conflict with the declared parity and computing the potential address
    /// count.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        running_date: Option<NaiveDate>,
        municipality_code: String,
        name_fi: String,
        name_sv: String,
        address_range: Vec<String>,
        parity: Parity,
        smallest_number: u32,
        highest_number: u32,
    ) -> Self {
        let mut smallest = smallest_number;
        let mut highest = highest_number;

        // A smallest number of the wrong parity either moves one up into the
        // range, or (when nothing above it remains) empties the range.
        let smallest_off_parity = (parity == Parity::Odd && smallest % 2 == 0)
            || (parity == Parity::Even && smallest % 2 == 1);
        if smallest_off_parity {
            if highest > smallest {
                smallest += 1;
            } else {
                smallest = 0;
                highest = 0;
            }
        }

        // A highest number of the wrong parity moves one down.
        let highest_off_parity = (parity == Parity::Odd && highest % 2 == 0)
            || (parity == Parity::Even && highest % 2 == 1);
        if highest > smallest && highest_off_parity {
            highest -= 1;
        }

        let numbers_in_range = if highest == smallest || highest == 0 {
            u32::from(smallest > 0)
        } else if highest > smallest {
            ((highest - smallest) / 2) + 1
        } else {
            0
        };

        // A named location without numbers still counts as one deliverable
        // address point.
        let potential_addresses = if numbers_in_range == 0 {
            u32::from(!name_fi.trim().is_empty() || !name_sv.trim().is_empty())
        } else {
            numbers_in_range
        };

        Self {
            running_date,
            municipality_code,
            name_fi,
            name_sv,
            address_range,
            parity,
            smallest_number: smallest,
            highest_number: highest,
            potential_addresses,
        }
    }
}

// =============================================================================
// Postal Code Location
// =============================================================================

/// Finnish postal code location
///
/// Created once per postal code, then mutated by repeated
/// [`add_to_municipality`](Self::add_to_municipality) /
/// [`add_street_address_range`](Self::add_street_address_range) calls as more
/// records are read. A postal code area may cover parts of several
/// municipalities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalCodeLocation {
    /// Snapshot date of the data file the postal code was first seen in
    pub running_date: Option<NaiveDate>,

    /// The postal code - 5 digits, leading zeros significant
    pub code: String,

    /// Location name in Finnish
    pub name_fi: String,

    /// Location name in Swedish
    pub name_sv: String,

    /// Abbreviated location name in Finnish
    pub abbreviation_fi: String,

    /// Abbreviated location name in Swedish
    pub abbreviation_sv: String,

    /// The date this postal code was first taken into use
    pub entry_into_force: Option<NaiveDate>,

    /// Type of the postal code
    pub type_code: Option<PostalCodeType>,

    /// Municipality codes in the order the postal code was attached to them
    municipality_codes: Vec<String>,

    /// Street address ranges within each attached municipality
    street_addresses: HashMap<String, Vec<StreetAddressRange>>,

    /// Running total of potential addresses within each attached municipality
    address_counts: HashMap<String, u32>,

    /// Top-ranked municipality code, cached after ingestion completes
    primary_municipality: Option<String>,
}

impl PostalCodeLocation {
    /// Create a new postal code location with no municipality attachments
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        running_date: Option<NaiveDate>,
        code: String,
        name_fi: String,
        name_sv: String,
        abbreviation_fi: String,
        abbreviation_sv: String,
        entry_into_force: Option<NaiveDate>,
        type_code: Option<PostalCodeType>,
    ) -> Self {
        Self {
            running_date,
            code,
            name_fi,
            name_sv,
            abbreviation_fi,
            abbreviation_sv,
            entry_into_force,
            type_code,
            municipality_codes: Vec::new(),
            street_addresses: HashMap::new(),
            address_counts: HashMap::new(),
            primary_municipality: None,
        }
    }

    /// Attach this postal code to a municipality.
    ///
    /// Idempotent: repeated attachment of the same municipality code leaves
    /// the range list and address count untouched.
    pub fn add_to_municipality(&mut self, municipality_code: &str) {
        if !self.street_addresses.contains_key(municipality_code) {
            self.municipality_codes.push(municipality_code.to_string());
            self.street_addresses
                .insert(municipality_code.to_string(), Vec::new());
            self.address_counts.insert(municipality_code.to_string(), 0);
        }
    }

    /// Append a street address range and add its potential address count to
    /// the per-municipality running total.
    pub fn add_street_address_range(&mut self, range: StreetAddressRange) {
        self.add_to_municipality(&range.municipality_code);
        let code = range.municipality_code.clone();
        if let Some(count) = self.address_counts.get_mut(&code) {
            *count += range.potential_addresses;
        }
        if let Some(ranges) = self.street_addresses.get_mut(&code) {
            ranges.push(range);
        }
    }

    /// Municipality codes this postal code is attached to, in attachment order
    pub fn municipality_codes(&self) -> &[String] {
        &self.municipality_codes
    }

    /// Whether this postal code is attached to the given municipality
    pub fn is_attached_to(&self, municipality_code: &str) -> bool {
        self.street_addresses.contains_key(municipality_code)
    }

    /// Street address ranges of this postal code within one municipality
    pub fn street_addresses_in(&self, municipality_code: &str) -> &[StreetAddressRange] {
        self.street_addresses
            .get(municipality_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Potential address count of this postal code within one municipality
    pub fn potential_addresses_in(&self, municipality_code: &str) -> u32 {
        self.address_counts
            .get(municipality_code)
            .copied()
            .unwrap_or(0)
    }

    /// Total potential address count across all attached municipalities
    pub fn total_potential_addresses(&self) -> u32 {
        self.address_counts.values().sum()
    }

    /// Cached code of the top-ranked municipality, set once after ingestion
    pub fn primary_municipality_code(&self) -> Option<&str> {
        self.primary_municipality.as_deref()
    }

    pub(crate) fn set_primary_municipality(&mut self, municipality_code: String) {
        self.primary_municipality = Some(municipality_code);
    }

    /// Checks if the municipality name and the postal code location name are
    /// similar: one padded name must be a prefix of the other, in Finnish or
    /// in Swedish. A space is appended before comparing so that "Vihtijärvi"
    /// does not match "Vihti" while "Laukaa As" still matches "Laukaa". The
    /// comparison is case-insensitive and locale-naive.
    pub fn is_name_similar_to(&self, municipality: &Municipality) -> bool {
        fn padded(name: &str) -> String {
            format!("{} ", name).to_lowercase()
        }

        fn similar(a: &str, b: &str) -> bool {
            if a.trim().is_empty() || b.trim().is_empty() {
                return false;
            }
            let a = padded(a);
            let b = padded(b);
            a.starts_with(&b) || b.starts_with(&a)
        }

        similar(&municipality.name_fi, &self.name_fi)
            || similar(&municipality.name_sv, &self.name_sv)
    }
}
