//! Report command implementation
//!
//! Renders the deterministic multi-level report: administrative regions in
//! code order, their municipalities in display name order, and each
//! municipality's postal codes in ranked order with potential address
//! counts.

use super::shared::{setup_logging, write_output};
use crate::Result;
use crate::app::models::{Municipality, PostalCodeLocation, PostalCodeType};
use crate::app::services::ingest::IngestPipeline;
use crate::app::services::registry::PostalCodeRegistry;
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::constants::NORMAL_POSTAL_CODE_SUFFIXES;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Report command runner for the Posti processor
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    args.validate()?;

    let data_dir = args.resolve_data_dir();
    info!("Building postal code report from {}", data_dir.display());

    let (registry, _stats) = IngestPipeline::new(&data_dir).load()?;
    let report = build_report(&registry, args.include_special);

    let rendered = match args.output_format {
        OutputFormat::Human => render_human(&report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)
                .map_err(|e| crate::Error::report_serialization("Failed to render report", e))?;
            json.push('\n');
            json
        }
        OutputFormat::Csv => render_csv(&report),
    };

    write_output(&rendered, args.output_file.as_deref())
}

/// Complete report: regions with their municipalities and postal codes
#[derive(Debug, Serialize)]
pub struct Report {
    pub regions: Vec<RegionReport>,
}

/// One administrative region and its reported municipalities
#[derive(Debug, Serialize)]
pub struct RegionReport {
    pub code: String,
    pub name_fi: String,
    pub name_sv: String,
    pub municipalities: Vec<MunicipalityReport>,
}

/// One municipality and its postal codes in ranked order
#[derive(Debug, Serialize)]
pub struct MunicipalityReport {
    pub code: String,
    pub name_fi: String,
    pub name_sv: String,
    pub finnish_name_first: bool,
    pub postal_codes: Vec<PostalCodeEntry>,
}

/// One postal code line within a municipality
#[derive(Debug, Serialize)]
pub struct PostalCodeEntry {
    pub code: String,
    pub name_fi: String,
    pub name_sv: String,
    /// Name order of the postal code's primary municipality
    pub finnish_name_first: bool,
    /// Potential addresses of this postal code within the owning municipality
    pub potential_addresses: u32,
}

/// Whether a postal code belongs in the report.
///
/// Without `include_special`, only ordinary geographic area codes pass: the
/// type must be normal and the final digit one of 0/5/7 (a few special codes
/// are typed normal in the source data and are excluded by their suffix).
fn is_included(postal_code: &PostalCodeLocation, include_special: bool) -> bool {
    include_special
        || (postal_code.type_code == Some(PostalCodeType::Normal)
            && postal_code
                .code
                .chars()
                .last()
                .is_some_and(|digit| NORMAL_POSTAL_CODE_SUFFIXES.contains(&digit)))
}

/// Assemble the report structure from the entity graph
pub fn build_report(registry: &PostalCodeRegistry, include_special: bool) -> Report {
    let included: Vec<&PostalCodeLocation> = registry
        .sorted_postal_codes()
        .into_iter()
        .filter(|postal_code| is_included(postal_code, include_special))
        .collect();
    let included_codes: HashSet<&str> = included
        .iter()
        .map(|postal_code| postal_code.code.as_str())
        .collect();
    debug!(
        "{} of {} postal codes included in the report",
        included.len(),
        registry.postal_code_count()
    );

    // Municipalities touched by the included postal codes, grouped by region
    let mut grouped: HashMap<&str, Vec<&Municipality>> = HashMap::new();
    let mut seen = HashSet::new();
    let mut without_region = 0usize;
    for postal_code in &included {
        for municipality in registry.ranked_municipalities_for(postal_code) {
            if !seen.insert(municipality.code.as_str()) {
                continue;
            }
            match municipality.region.code() {
                Some(region_code) => grouped.entry(region_code).or_default().push(municipality),
                None => without_region += 1,
            }
        }
    }
    if without_region > 0 {
        warn!(
            "{} municipalities have no region information and are not reported",
            without_region
        );
    }

    let mut region_codes: Vec<&str> = grouped.keys().copied().collect();
    region_codes.sort_unstable();

    let mut regions = Vec::new();
    for region_code in region_codes {
        let Some(region) = registry.region(region_code) else {
            continue;
        };

        let mut municipalities = grouped[region_code].clone();
        municipalities.sort_by_key(|municipality| display_sort_key(municipality));

        let municipality_reports = municipalities
            .into_iter()
            .map(|municipality| MunicipalityReport {
                code: municipality.code.clone(),
                name_fi: municipality.name_fi.clone(),
                name_sv: municipality.name_sv.clone(),
                finnish_name_first: municipality.is_finnish_name_first(),
                postal_codes: postal_code_entries(registry, municipality, &included_codes),
            })
            .collect();

        regions.push(RegionReport {
            code: region.code.clone(),
            name_fi: region.name_fi.clone(),
            name_sv: region.name_sv.clone(),
            municipalities: municipality_reports,
        });
    }

    Report { regions }
}

/// The included postal codes of one municipality, in ranked order
fn postal_code_entries(
    registry: &PostalCodeRegistry,
    municipality: &Municipality,
    included_codes: &HashSet<&str>,
) -> Vec<PostalCodeEntry> {
    registry
        .ranked_postal_codes_for(municipality)
        .into_iter()
        .filter(|postal_code| included_codes.contains(postal_code.code.as_str()))
        .map(|postal_code| PostalCodeEntry {
            code: postal_code.code.clone(),
            name_fi: postal_code.name_fi.clone(),
            name_sv: postal_code.name_sv.clone(),
            finnish_name_first: registry
                .primary_municipality_of(postal_code)
                .map(Municipality::is_finnish_name_first)
                .unwrap_or(true),
            potential_addresses: postal_code.potential_addresses_in(&municipality.code),
        })
        .collect()
}

/// Sort key for municipalities within a region: the display name in the
/// municipality's leading language, case-insensitively
fn display_sort_key(municipality: &Municipality) -> String {
    if municipality.is_finnish_name_first() {
        municipality.name_fi.to_lowercase()
    } else {
        municipality.name_sv.to_lowercase()
    }
}

/// Join a bilingual name pair for display, leading language first
fn bilingual_name(name_fi: &str, name_sv: &str, finnish_first: bool) -> String {
    if name_fi == name_sv || name_sv.trim().is_empty() {
        name_fi.to_string()
    } else if name_fi.trim().is_empty() {
        name_sv.to_string()
    } else if finnish_first {
        format!("{} - {}", name_fi, name_sv)
    } else {
        format!("{} - {}", name_sv, name_fi)
    }
}

/// Render the report as the plain-text console listing
fn render_human(report: &Report) -> String {
    let mut output = String::new();

    for (region_index, region) in report.regions.iter().enumerate() {
        if region_index > 0 {
            output.push('\n');
        }
        let header = format!(
            "{} [{}]",
            bilingual_name(&region.name_fi, &region.name_sv, true),
            region.code
        );
        output.push_str(&header);
        output.push('\n');
        output.push_str(&"=".repeat(header.chars().count()));
        output.push('\n');

        for (municipality_index, municipality) in region.municipalities.iter().enumerate() {
            if municipality_index > 0 {
                output.push('\n');
            }
            output.push_str(&format!(
                "{} [{}]:\n",
                bilingual_name(
                    &municipality.name_fi,
                    &municipality.name_sv,
                    municipality.finnish_name_first
                ),
                municipality.code
            ));

            for postal_code in &municipality.postal_codes {
                let name = bilingual_name(
                    &postal_code.name_fi,
                    &postal_code.name_sv,
                    postal_code.finnish_name_first,
                );
                if postal_code.potential_addresses > 0 {
                    output.push_str(&format!(
                        "  {} {} ({})\n",
                        postal_code.code, name, postal_code.potential_addresses
                    ));
                } else {
                    output.push_str(&format!("  {} {}\n", postal_code.code, name));
                }
            }
        }
    }

    output
}

/// Render the report as flat CSV rows
fn render_csv(report: &Report) -> String {
    let mut output =
        String::from("region_code,municipality_code,postal_code,name_fi,name_sv,potential_addresses\n");

    for region in &report.regions {
        for municipality in &region.municipalities {
            for postal_code in &municipality.postal_codes {
                output.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    csv_field(&region.code),
                    csv_field(&municipality.code),
                    csv_field(&postal_code.code),
                    csv_field(&postal_code.name_fi),
                    csv_field(&postal_code.name_sv),
                    postal_code.potential_addresses
                ));
            }
        }
    }

    output
}

/// Quote a CSV field when it contains a delimiter or quote
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
