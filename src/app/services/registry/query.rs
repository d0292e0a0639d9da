//! Ranking and ordering queries over the entity graph
//!
//! Pure functions ranking the municipalities of a postal code and the postal
//! codes of a municipality, used by the reporting layer. All sorts are
//! stable; `ranked_postal_codes_for` is a total order thanks to the postal
//! code final tiebreak.

use super::PostalCodeRegistry;
use crate::app::models::{Municipality, PostalCodeLocation};
use std::cmp::Reverse;

impl PostalCodeRegistry {
    /// Municipalities attached to a postal code, best match first:
    /// descending by name similarity, then by potential address count within
    /// the municipality. Ties keep the attachment order.
    pub fn ranked_municipalities_for(
        &self,
        postal_code: &PostalCodeLocation,
    ) -> Vec<&Municipality> {
        let mut municipalities: Vec<&Municipality> = postal_code
            .municipality_codes()
            .iter()
            .filter_map(|code| self.municipality(code))
            .collect();

        municipalities.sort_by_key(|municipality| {
            (
                Reverse(postal_code.is_name_similar_to(municipality)),
                Reverse(postal_code.potential_addresses_in(&municipality.code)),
            )
        });
        municipalities
    }

    /// The municipality a postal code is primarily for.
    ///
    /// Uses the code cached by
    /// [`finalize_primary_municipalities`](Self::finalize_primary_municipalities)
    /// when present, otherwise falls back to ranking on the fly. `None` only
    /// for a postal code attached to no municipality.
    pub fn primary_municipality_of(
        &self,
        postal_code: &PostalCodeLocation,
    ) -> Option<&Municipality> {
        if let Some(code) = postal_code.primary_municipality_code() {
            return self.municipality(code);
        }
        self.ranked_municipalities_for(postal_code).into_iter().next()
    }

    /// Postal codes attached to a municipality, best match first: descending
    /// by whether this municipality is the postal code's primary
    /// municipality, then by name similarity, then by potential address
    /// count within this municipality, finally ascending by postal code.
    ///
    /// The postal code tiebreak makes this a total order: no two elements
    /// ever compare equal.
    pub fn ranked_postal_codes_for(
        &self,
        municipality: &Municipality,
    ) -> Vec<&PostalCodeLocation> {
        let mut postal_codes: Vec<&PostalCodeLocation> = self
            .postal_codes
            .values()
            .filter(|postal_code| postal_code.is_attached_to(&municipality.code))
            .collect();

        postal_codes.sort_by_key(|postal_code| {
            let is_primary = self
                .primary_municipality_of(postal_code)
                .is_some_and(|primary| primary.code == municipality.code);
            (
                Reverse(is_primary),
                Reverse(postal_code.is_name_similar_to(municipality)),
                Reverse(postal_code.potential_addresses_in(&municipality.code)),
                postal_code.code.clone(),
            )
        });
        postal_codes
    }

    /// All postal codes ordered by (primary municipality's region code,
    /// primary municipality code, postal code). Postal codes whose primary
    /// municipality has no known region sort first within an empty region
    /// code.
    pub fn sorted_postal_codes(&self) -> Vec<&PostalCodeLocation> {
        let mut postal_codes: Vec<&PostalCodeLocation> = self.postal_codes.values().collect();

        postal_codes.sort_by_key(|postal_code| {
            let primary = self.primary_municipality_of(postal_code);
            let region_code = primary
                .and_then(|municipality| municipality.region.code())
                .unwrap_or_default()
                .to_string();
            let municipality_code = primary
                .map(|municipality| municipality.code.clone())
                .unwrap_or_default();
            (region_code, municipality_code, postal_code.code.clone())
        });
        postal_codes
    }

    /// Compute and cache the primary municipality of every postal code.
    ///
    /// Called once at the end of ingestion so that later queries read the
    /// cached ranking result instead of recomputing it.
    pub fn finalize_primary_municipalities(&mut self) {
        let primaries: Vec<(String, String)> = self
            .postal_codes
            .values()
            .filter_map(|postal_code| {
                self.ranked_municipalities_for(postal_code)
                    .first()
                    .map(|municipality| (postal_code.code.clone(), municipality.code.clone()))
            })
            .collect();

        for (postal_code, municipality_code) in primaries {
            if let Some(entry) = self.postal_codes.get_mut(&postal_code) {
                entry.set_primary_municipality(municipality_code);
            }
        }
    }
}
