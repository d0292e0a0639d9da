//! Tests for ranking and ordering queries

use super::{add_municipality, add_postal_code_with_ranges};
use crate::app::models::RegionLink;
use crate::app::services::registry::PostalCodeRegistry;

#[test]
fn test_municipality_ranking_prefers_similar_name() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "091", "Helsinki", "Helsingfors");
    add_municipality(&mut registry, "049", "Espoo", "Esbo");

    // Helsinki is attached first and has more addresses, but the name of the
    // postal code matches Espoo
    add_postal_code_with_ranges(&mut registry, "02100", "Espoo keskus", "091", "Rajatie", 10);
    add_postal_code_with_ranges(&mut registry, "02100", "Espoo keskus", "049", "Keskustie", 2);

    let postal_code = registry.postal_code("02100").unwrap();
    let ranked = registry.ranked_municipalities_for(postal_code);
    let codes: Vec<&str> = ranked.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["049", "091"]);
}

#[test]
fn test_municipality_ranking_falls_back_to_address_count() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "091", "Helsinki", "Helsingfors");
    add_municipality(&mut registry, "092", "Vantaa", "Vanda");

    add_postal_code_with_ranges(&mut registry, "01730", "Seutula", "091", "Katriinantie", 3);
    add_postal_code_with_ranges(&mut registry, "01730", "Seutula", "092", "Kirkkotie", 8);

    let postal_code = registry.postal_code("01730").unwrap();
    let ranked = registry.ranked_municipalities_for(postal_code);
    let codes: Vec<&str> = ranked.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["092", "091"]);
}

#[test]
fn test_municipality_ranking_ties_keep_attachment_order() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "111", "Aaa", "Aaa");
    add_municipality(&mut registry, "222", "Bbb", "Bbb");
    add_municipality(&mut registry, "333", "Ccc", "Ccc");

    for code in ["333", "111", "222"] {
        add_postal_code_with_ranges(&mut registry, "55555", "Elsewhere", code, "Tie", 1);
    }

    let postal_code = registry.postal_code("55555").unwrap();
    let ranked = registry.ranked_municipalities_for(postal_code);
    let codes: Vec<&str> = ranked.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["333", "111", "222"]);
}

#[test]
fn test_primary_municipality_cached_by_finalize() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "091", "Helsinki", "Helsingfors");
    add_municipality(&mut registry, "049", "Espoo", "Esbo");
    add_postal_code_with_ranges(&mut registry, "02100", "Espoo keskus", "091", "Rajatie", 10);
    add_postal_code_with_ranges(&mut registry, "02100", "Espoo keskus", "049", "Keskustie", 1);

    assert!(
        registry
            .postal_code("02100")
            .unwrap()
            .primary_municipality_code()
            .is_none()
    );

    registry.finalize_primary_municipalities();

    let postal_code = registry.postal_code("02100").unwrap();
    assert_eq!(postal_code.primary_municipality_code(), Some("049"));
    let primary = registry.primary_municipality_of(postal_code).unwrap();
    assert_eq!(primary.code, "049");
}

#[test]
fn test_primary_municipality_without_finalize() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "092", "Vantaa", "Vanda");
    add_postal_code_with_ranges(&mut registry, "01510", "Vantaa", "092", "Ratatie", 1);

    // Falls back to ranking on the fly when nothing is cached
    let postal_code = registry.postal_code("01510").unwrap();
    let primary = registry.primary_municipality_of(postal_code).unwrap();
    assert_eq!(primary.code, "092");
}

#[test]
fn test_postal_code_ranking_is_total() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "091", "Helsinki", "Helsingfors");

    // Identical similarity and counts: only the code itself breaks ties
    for code in ["00530", "00100", "00510"] {
        add_postal_code_with_ranges(&mut registry, code, "Elsewhere", "091", "Tie", 1);
    }
    registry.finalize_primary_municipalities();

    let municipality = registry.municipality("091").unwrap();
    let ranked = registry.ranked_postal_codes_for(municipality);
    let codes: Vec<&str> = ranked.iter().map(|pc| pc.code.as_str()).collect();
    assert_eq!(codes, ["00100", "00510", "00530"]);
}

#[test]
fn test_postal_code_ranking_primary_first() {
    let mut registry = PostalCodeRegistry::new();
    add_municipality(&mut registry, "049", "Espoo", "Esbo");
    add_municipality(&mut registry, "091", "Helsinki", "Helsingfors");

    // 00100 is primarily Helsinki's, 02780 primarily Espoo's; both attach to
    // Espoo, and 00100 has the larger count within Espoo
    add_postal_code_with_ranges(&mut registry, "00100", "Helsinki", "091", "Mannerheimintie", 9);
    add_postal_code_with_ranges(&mut registry, "00100", "Helsinki", "049", "Rajatie", 5);
    add_postal_code_with_ranges(&mut registry, "02780", "Espoon keskus", "049", "Siltatie", 2);
    registry.finalize_primary_municipalities();

    let espoo = registry.municipality("049").unwrap();
    let ranked = registry.ranked_postal_codes_for(espoo);
    let codes: Vec<&str> = ranked.iter().map(|pc| pc.code.as_str()).collect();
    assert_eq!(codes, ["02780", "00100"]);
}

#[test]
fn test_sorted_postal_codes_order() {
    let mut registry = PostalCodeRegistry::new();
    registry.get_or_create_region("01", None, "Uusimaa", "Nyland");
    registry.get_or_create_region("02", None, "Varsinais-Suomi", "Egentliga Finland");
    registry.get_or_create_municipality(
        "091",
        None,
        RegionLink::Known("01".to_string()),
        "Helsinki",
        "Helsingfors",
        None,
    );
    registry.get_or_create_municipality(
        "200",
        None,
        RegionLink::Known("02".to_string()),
        "Turku",
        "Åbo",
        None,
    );
    add_municipality(&mut registry, "999", "Nowhere", "Ingenstans");

    add_postal_code_with_ranges(&mut registry, "20100", "Turku", "200", "Aurakatu", 1);
    add_postal_code_with_ranges(&mut registry, "00100", "Helsinki", "091", "Mannerheimintie", 1);
    add_postal_code_with_ranges(&mut registry, "00530", "Helsinki", "091", "Hämeentie", 1);
    add_postal_code_with_ranges(&mut registry, "99999", "Korvatunturi", "999", "", 1);
    registry.finalize_primary_municipalities();

    let codes: Vec<&str> = registry
        .sorted_postal_codes()
        .iter()
        .map(|pc| pc.code.as_str())
        .collect();

    // Region-less municipalities sort first under the empty region code
    assert_eq!(codes, ["99999", "00100", "00530", "20100"]);
}
