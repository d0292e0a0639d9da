//! Postal code entity registry
//!
//! This module provides the deduplicating entity graph built during
//! ingestion: administrative regions, municipalities and postal code
//! locations, each keyed by its natural code with get-or-create semantics.
//! The same code seen again - on a later line or in the other data file -
//! always resolves to the entity created first, with the first-seen
//! attributes.

use crate::app::models::{
    AdministrativeRegion, LanguageDistributionCode, Municipality, PostalCodeLocation,
    PostalCodeType, RegionLink,
};
use chrono::NaiveDate;
use std::collections::HashMap;

pub mod query;

#[cfg(test)]
pub mod tests;

/// Deduplicating registry of regions, municipalities and postal codes
///
/// The registry is the single owner of every entity; cross-references
/// between entities are natural codes resolved through it.
#[derive(Debug, Clone, Default)]
pub struct PostalCodeRegistry {
    /// Administrative regions indexed by region code
    pub(crate) regions: HashMap<String, AdministrativeRegion>,

    /// Municipalities indexed by municipality code
    pub(crate) municipalities: HashMap<String, Municipality>,

    /// Postal code locations indexed by postal code
    pub(crate) postal_codes: HashMap<String, PostalCodeLocation>,
}

impl PostalCodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a region by code, creating it when unseen.
    ///
    /// For an already-registered code the supplied attributes are ignored;
    /// the first record seen for a code fixes its attributes.
    pub fn get_or_create_region(
        &mut self,
        code: &str,
        running_date: Option<NaiveDate>,
        name_fi: &str,
        name_sv: &str,
    ) -> &AdministrativeRegion {
        self.regions.entry(code.to_string()).or_insert_with(|| {
            AdministrativeRegion::new(
                running_date,
                code.to_string(),
                name_fi.to_string(),
                name_sv.to_string(),
            )
        })
    }

    /// Resolve a municipality by code, creating it when unseen.
    ///
    /// The region link is set only at creation; an already-registered
    /// municipality is never re-pointed, even when a later record implies a
    /// different (or a newly known) region.
    #[allow(clippy::too_many_arguments)]
    pub fn get_or_create_municipality(
        &mut self,
        code: &str,
        running_date: Option<NaiveDate>,
        region: RegionLink,
        name_fi: &str,
        name_sv: &str,
        language_distribution: Option<LanguageDistributionCode>,
    ) -> &Municipality {
        self.municipalities
            .entry(code.to_string())
            .or_insert_with(|| {
                Municipality::new(
                    running_date,
                    region,
                    code.to_string(),
                    name_fi.to_string(),
                    name_sv.to_string(),
                    language_distribution,
                )
            })
    }

    /// Resolve a postal code by code, creating it when unseen.
    ///
    /// Returns a mutable reference so the caller can attach municipalities
    /// and street address ranges to it.
    #[allow(clippy::too_many_arguments)]
    pub fn get_or_create_postal_code(
        &mut self,
        code: &str,
        running_date: Option<NaiveDate>,
        name_fi: &str,
        name_sv: &str,
        abbreviation_fi: &str,
        abbreviation_sv: &str,
        entry_into_force: Option<NaiveDate>,
        type_code: Option<PostalCodeType>,
    ) -> &mut PostalCodeLocation {
        self.postal_codes.entry(code.to_string()).or_insert_with(|| {
            PostalCodeLocation::new(
                running_date,
                code.to_string(),
                name_fi.to_string(),
                name_sv.to_string(),
                abbreviation_fi.to_string(),
                abbreviation_sv.to_string(),
                entry_into_force,
                type_code,
            )
        })
    }

    /// Look up a region by code
    pub fn region(&self, code: &str) -> Option<&AdministrativeRegion> {
        self.regions.get(code)
    }

    /// Look up a municipality by code
    pub fn municipality(&self, code: &str) -> Option<&Municipality> {
        self.municipalities.get(code)
    }

    /// Look up a postal code location by postal code
    pub fn postal_code(&self, code: &str) -> Option<&PostalCodeLocation> {
        self.postal_codes.get(code)
    }

    /// All administrative regions, in no particular order
    pub fn regions(&self) -> impl Iterator<Item = &AdministrativeRegion> {
        self.regions.values()
    }

    /// All municipalities, in no particular order
    pub fn municipalities(&self) -> impl Iterator<Item = &Municipality> {
        self.municipalities.values()
    }

    /// All postal code locations, in no particular order
    pub fn postal_codes(&self) -> impl Iterator<Item = &PostalCodeLocation> {
        self.postal_codes.values()
    }

    /// Number of registered regions
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of registered municipalities
    pub fn municipality_count(&self) -> usize {
        self.municipalities.len()
    }

    /// Number of registered postal codes
    pub fn postal_code_count(&self) -> usize {
        self.postal_codes.len()
    }
}
