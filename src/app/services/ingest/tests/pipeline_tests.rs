//! Tests for two-pass ingestion over synthetic data files

use super::write_latin1_file;
use crate::app::models::RegionLink;
use crate::app::services::ingest::IngestPipeline;
use crate::app::services::record_decoder::tests::{
    make_line, sample_postal_code_line, sample_street_address_line,
};
use tempfile::TempDir;

/// A `KATUN` line for one street number range in Espoo keskus (02100)
fn address_line(street_fi: &str, parity: &str, smallest: &str, highest: &str) -> String {
    make_line(
        256,
        &[
            (0, "KATUN"),
            (5, "20240503"),
            (13, "02100"),
            (18, "Espoo keskus"),
            (48, "Esbo centrum"),
            (102, street_fi),
            (186, parity),
            (187, smallest),
            (200, highest),
            (213, "049"),
            (216, "Espoo"),
            (236, "Esbo"),
        ],
    )
}

#[test]
fn test_end_to_end_single_entity_graph() {
    let temp_dir = TempDir::new().unwrap();
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[sample_postal_code_line(), sample_postal_code_line()],
    );
    write_latin1_file(
        &temp_dir.path().join("BAF_20240503.dat"),
        &[
            address_line("Keskustie", "1", "101", "107"), // 101,103,105,107 -> 4
            address_line("Rantatie", "1", "1", "1"),      // single number -> 1
            address_line("Saunalahti", "", "", ""),       // named location -> 1
        ],
    );

    let (registry, stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    assert_eq!(registry.region_count(), 1);
    assert_eq!(registry.municipality_count(), 1);
    assert_eq!(registry.postal_code_count(), 1);
    assert_eq!(stats.postal_code_pass.records_ingested, 2);
    assert_eq!(stats.basic_address_pass.records_ingested, 3);

    let postal_code = registry.postal_code("02100").unwrap();
    let ranges = postal_code.street_addresses_in("049");
    assert_eq!(ranges.len(), 3);

    // The aggregated count equals the sum of the individual range counts
    let individual_sum: u32 = ranges.iter().map(|r| r.potential_addresses).sum();
    assert_eq!(individual_sum, 6);
    assert_eq!(postal_code.potential_addresses_in("049"), individual_sum);
    assert_eq!(postal_code.primary_municipality_code(), Some("049"));

    let municipality = registry.municipality("049").unwrap();
    assert_eq!(municipality.region, RegionLink::Known("01".to_string()));
    assert_eq!(registry.region("01").unwrap().name_fi, "Uusimaa");
}

#[test]
fn test_malformed_lines_are_skipped_without_failing() {
    let temp_dir = TempDir::new().unwrap();
    let good = sample_postal_code_line();
    let short = good[..219].to_string();
    let wrong_tag = make_line(220, &[(0, "XXXXX"), (13, "02100")]);
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[good, short, wrong_tag],
    );

    let (registry, stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    assert_eq!(registry.postal_code_count(), 1);
    assert_eq!(stats.postal_code_pass.records_ingested, 1);
    assert_eq!(stats.postal_code_pass.lines_skipped, 2);
}

#[test]
fn test_malformed_line_does_not_end_the_read_loop() {
    let temp_dir = TempDir::new().unwrap();
    let mut second = sample_postal_code_line();
    second.replace_range(13..18, "02200");
    let short = sample_postal_code_line()[..219].to_string();
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[sample_postal_code_line(), short, second],
    );

    let (registry, _stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    // The record after the malformed line is still ingested
    assert_eq!(registry.postal_code_count(), 2);
    assert!(registry.postal_code("02200").is_some());
}

#[test]
fn test_empty_line_ends_the_read_loop() {
    let temp_dir = TempDir::new().unwrap();
    let mut unreached = sample_postal_code_line();
    unreached.replace_range(13..18, "02200");
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[sample_postal_code_line(), String::new(), unreached],
    );

    let (registry, stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    assert_eq!(registry.postal_code_count(), 1);
    assert_eq!(stats.postal_code_pass.lines_read, 1);
    assert!(registry.postal_code("02200").is_none());
}

#[test]
fn test_missing_files_produce_empty_graph() {
    let temp_dir = TempDir::new().unwrap();

    let (registry, stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    assert_eq!(registry.postal_code_count(), 0);
    assert_eq!(registry.municipality_count(), 0);
    assert_eq!(registry.region_count(), 0);
    assert!(stats.postal_code_pass.file.is_none());
    assert!(stats.basic_address_pass.file.is_none());
}

#[test]
fn test_address_only_municipality_has_no_region() {
    let temp_dir = TempDir::new().unwrap();
    // No metadata file at all: the municipality comes from the address pass
    write_latin1_file(
        &temp_dir.path().join("BAF_20240503.dat"),
        &[sample_street_address_line()],
    );

    let (registry, _stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    let municipality = registry.municipality("049").unwrap();
    assert_eq!(municipality.region, RegionLink::Unknown);
    assert_eq!(registry.region_count(), 0);

    // Address file names keep their fixed-width padding
    assert_eq!(municipality.name_fi, format!("{:<20}", "Espoo"));

    let postal_code = registry.postal_code("02100").unwrap();
    assert_eq!(postal_code.potential_addresses_in("049"), 4);
}

#[test]
fn test_newest_file_of_each_family_wins() {
    let temp_dir = TempDir::new().unwrap();
    let mut old = sample_postal_code_line();
    old.replace_range(13..18, "09999");
    write_latin1_file(&temp_dir.path().join("PCF_20240101.dat"), &[old]);
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[sample_postal_code_line()],
    );

    let (registry, stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    assert!(registry.postal_code("02100").is_some());
    assert!(registry.postal_code("09999").is_none());
    assert_eq!(
        stats
            .postal_code_pass
            .file
            .unwrap()
            .file_name()
            .unwrap(),
        "PCF_20240503.dat"
    );
}

#[test]
fn test_repeated_metadata_attachment_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write_latin1_file(
        &temp_dir.path().join("PCF_20240503.dat"),
        &[
            sample_postal_code_line(),
            sample_postal_code_line(),
            sample_postal_code_line(),
        ],
    );

    let (registry, _stats) = IngestPipeline::new(temp_dir.path()).load().unwrap();

    let postal_code = registry.postal_code("02100").unwrap();
    assert_eq!(postal_code.municipality_codes(), ["049"]);
    assert_eq!(postal_code.potential_addresses_in("049"), 0);
}
