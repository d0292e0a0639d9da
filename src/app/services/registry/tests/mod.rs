//! Tests for the postal code entity registry

pub mod query_tests;

use crate::app::models::{Parity, RegionLink, StreetAddressRange};
use crate::app::services::registry::PostalCodeRegistry;

/// Register a municipality with no region information
pub fn add_municipality(registry: &mut PostalCodeRegistry, code: &str, name_fi: &str, name_sv: &str) {
    registry.get_or_create_municipality(code, None, RegionLink::Unknown, name_fi, name_sv, None);
}

/// Register a postal code attached to one municipality with a number of
/// single-address ranges on the given street
pub fn add_postal_code_with_ranges(
    registry: &mut PostalCodeRegistry,
    postal_code: &str,
    name_fi: &str,
    municipality_code: &str,
    street_name: &str,
    range_count: u32,
) {
    let location = registry.get_or_create_postal_code(
        postal_code,
        None,
        name_fi,
        "",
        "",
        "",
        None,
        None,
    );
    location.add_to_municipality(municipality_code);
    for _ in 0..range_count {
        location.add_street_address_range(StreetAddressRange::new(
            None,
            municipality_code.to_string(),
            street_name.to_string(),
            String::new(),
            Vec::new(),
            Parity::None,
            0,
            0,
        ));
    }
}
