//! Stats command implementation
//!
//! Summarizes an ingestion run: pass statistics, entity counts and the
//! municipalities with the most potential addresses.

use super::shared::setup_logging;
use crate::Result;
use crate::app::services::ingest::{IngestPipeline, IngestStats};
use crate::app::services::registry::PostalCodeRegistry;
use crate::cli::args::{OutputFormat, StatsArgs};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::info;

/// Stats command runner for the Posti processor
pub fn run_stats(args: StatsArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let data_dir = args.resolve_data_dir();
    info!("Summarizing postal code data in {}", data_dir.display());

    let (registry, stats) = IngestPipeline::new(&data_dir).load()?;
    let summary = DataSummary::from_run(data_dir, &registry, stats);

    match args.output_format {
        OutputFormat::Human => print_human_summary(&summary),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| crate::Error::report_serialization("Failed to render summary", e))?;
            println!("{}", json);
        }
        OutputFormat::Csv => print_csv_summary(&summary),
    }

    Ok(())
}

/// Summary of one ingestion run
#[derive(Debug, Serialize)]
pub struct DataSummary {
    pub data_dir: PathBuf,
    pub regions: usize,
    pub municipalities: usize,
    pub municipalities_without_region: usize,
    pub postal_codes: usize,
    pub street_address_ranges: usize,
    pub potential_addresses: u64,
    pub top_municipalities: Vec<MunicipalityTotal>,
    pub ingest: IngestStats,
}

/// Potential address total of one municipality
#[derive(Debug, Serialize)]
pub struct MunicipalityTotal {
    pub code: String,
    pub name: String,
    pub potential_addresses: u64,
}

impl DataSummary {
    /// Derive the summary numbers from a finished run
    pub fn from_run(
        data_dir: PathBuf,
        registry: &PostalCodeRegistry,
        ingest: IngestStats,
    ) -> Self {
        let municipalities_without_region = registry
            .municipalities()
            .filter(|municipality| municipality.region.code().is_none())
            .count();

        let mut street_address_ranges = 0usize;
        let mut potential_addresses = 0u64;
        let mut per_municipality: HashMap<&str, u64> = HashMap::new();
        for postal_code in registry.postal_codes() {
            for municipality_code in postal_code.municipality_codes() {
                let ranges = postal_code.street_addresses_in(municipality_code);
                street_address_ranges += ranges.len();
                let count = u64::from(postal_code.potential_addresses_in(municipality_code));
                potential_addresses += count;
                *per_municipality.entry(municipality_code).or_default() += count;
            }
        }

        let mut top_municipalities: Vec<MunicipalityTotal> = per_municipality
            .into_iter()
            .map(|(code, total)| MunicipalityTotal {
                code: code.to_string(),
                name: registry
                    .municipality(code)
                    .map(|municipality| municipality.name_fi.trim().to_string())
                    .unwrap_or_default(),
                potential_addresses: total,
            })
            .collect();
        top_municipalities.sort_by(|a, b| {
            b.potential_addresses
                .cmp(&a.potential_addresses)
                .then_with(|| a.code.cmp(&b.code))
        });
        top_municipalities.truncate(10);

        Self {
            data_dir,
            regions: registry.region_count(),
            municipalities: registry.municipality_count(),
            municipalities_without_region,
            postal_codes: registry.postal_code_count(),
            street_address_ranges,
            potential_addresses,
            top_municipalities,
            ingest,
        }
    }
}

/// Print the human-readable summary
fn print_human_summary(summary: &DataSummary) {
    println!("📊 {}", "Finnish Postal Code Data Summary".bold());
    println!("===================================");
    println!("📁 Data directory: {}", summary.data_dir.display());

    for (label, pass) in [
        ("Postal code file", &summary.ingest.postal_code_pass),
        ("Basic address file", &summary.ingest.basic_address_pass),
    ] {
        match &pass.file {
            Some(file) => println!(
                "📄 {}: {} ({} records, {} skipped)",
                label,
                file.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_else(|| file.display().to_string()),
                pass.records_ingested,
                pass.lines_skipped
            ),
            None => println!("📄 {}: {}", label, "not found".yellow()),
        }
    }

    println!();
    println!("🏛  Regions: {}", summary.regions);
    println!(
        "🏘  Municipalities: {} ({} without region)",
        summary.municipalities, summary.municipalities_without_region
    );
    println!("📮 Postal codes: {}", summary.postal_codes);
    println!("🛣  Street address ranges: {}", summary.street_address_ranges);
    println!("🏠 Potential addresses: {}", summary.potential_addresses);
    println!(
        "⏱  Load time: {:.2}s",
        summary.ingest.load_duration.as_secs_f64()
    );

    if !summary.top_municipalities.is_empty() {
        println!();
        println!("🏆 Top municipalities by potential addresses:");
        for municipality in &summary.top_municipalities {
            println!(
                "   {} [{}]: {}",
                municipality.name, municipality.code, municipality.potential_addresses
            );
        }
    }
}

/// Print the summary as metric,value CSV rows
fn print_csv_summary(summary: &DataSummary) {
    println!("metric,value");
    println!("regions,{}", summary.regions);
    println!("municipalities,{}", summary.municipalities);
    println!(
        "municipalities_without_region,{}",
        summary.municipalities_without_region
    );
    println!("postal_codes,{}", summary.postal_codes);
    println!("street_address_ranges,{}", summary.street_address_ranges);
    println!("potential_addresses,{}", summary.potential_addresses);
    println!("lines_read,{}", summary.ingest.total_lines_read());
    println!("lines_skipped,{}", summary.ingest.total_lines_skipped());
}
