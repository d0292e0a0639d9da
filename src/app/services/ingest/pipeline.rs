//! Two-pass ingestion of the Posti data files
//!
//! The metadata pass establishes regions, municipalities and postal codes
//! with their administrative links; the address pass appends street address
//! ranges and their potential address counts. The pass order is fixed:
//! a municipality first created by the address pass carries no region, and
//! an already-registered municipality is never re-pointed.

use super::stats::{IngestStats, PassStats};
use crate::Result;
use crate::app::adapters::filesystem::{latest_data_file, read_latin1_lines};
use crate::app::models::{RegionLink, StreetAddressRange};
use crate::app::services::record_decoder::{PostalCodeRecord, StreetAddressRecord};
use crate::app::services::registry::PostalCodeRegistry;
use crate::constants::{BASIC_ADDRESS_FILE_PATTERN, POSTAL_CODE_FILE_PATTERN};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Sequential two-pass ingestion pipeline over one data directory
#[derive(Debug, Clone)]
pub struct IngestPipeline {
    data_dir: PathBuf,
}

impl IngestPipeline {
    /// Create a pipeline reading from the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Build the complete entity graph from the newest data files.
    ///
    /// Malformed input degrades the graph instead of failing the build; the
    /// only errors surfaced here are filesystem-level ones.
    pub fn load(&self) -> Result<(PostalCodeRegistry, IngestStats)> {
        let start_time = Instant::now();
        let mut registry = PostalCodeRegistry::new();
        let mut stats = IngestStats::default();

        self.read_postal_code_file(&mut registry, &mut stats.postal_code_pass)?;
        self.read_basic_address_file(&mut registry, &mut stats.basic_address_pass)?;
        registry.finalize_primary_municipalities();

        stats.load_duration = start_time.elapsed();
        info!(
            "Ingested {} regions, {} municipalities, {} postal codes from {} records in {:.2}s",
            registry.region_count(),
            registry.municipality_count(),
            registry.postal_code_count(),
            stats.total_records_ingested(),
            stats.load_duration.as_secs_f64()
        );

        Ok((registry, stats))
    }

    /// First pass: postal code metadata (`PCF_*.dat`).
    ///
    /// Each record resolves its region, municipality and postal code and
    /// attaches the postal code to the municipality.
    fn read_postal_code_file(
        &self,
        registry: &mut PostalCodeRegistry,
        stats: &mut PassStats,
    ) -> Result<()> {
        let Some(path) = latest_data_file(&self.data_dir, POSTAL_CODE_FILE_PATTERN)? else {
            debug!(
                "No postal code metadata file in {}; skipping pass",
                self.data_dir.display()
            );
            return Ok(());
        };
        info!("Reading postal code metadata from {}", path.display());
        stats.file = Some(path.clone());

        for line in read_latin1_lines(&path)? {
            if line.trim().is_empty() {
                break;
            }
            stats.lines_read += 1;

            let Some(record) = PostalCodeRecord::decode(&line) else {
                stats.lines_skipped += 1;
                debug!("Skipping undecodable metadata line {}", stats.lines_read);
                continue;
            };

            registry.get_or_create_region(
                &record.region_code,
                record.running_date,
                &record.region_name_fi,
                &record.region_name_sv,
            );
            registry.get_or_create_municipality(
                &record.municipality_code,
                record.running_date,
                RegionLink::Known(record.region_code.clone()),
                &record.municipality_name_fi,
                &record.municipality_name_sv,
                record.language_distribution,
            );
            let postal_code = registry.get_or_create_postal_code(
                &record.postal_code,
                record.running_date,
                &record.name_fi,
                &record.name_sv,
                &record.abbreviation_fi,
                &record.abbreviation_sv,
                record.entry_into_force,
                record.type_code,
            );
            postal_code.add_to_municipality(&record.municipality_code);
            stats.records_ingested += 1;
        }

        info!(
            "Metadata pass: {} records ingested, {} lines skipped",
            stats.records_ingested, stats.lines_skipped
        );
        Ok(())
    }

    /// Second pass: basic addresses (`BAF_*.dat`).
    ///
    /// Each record resolves its municipality (without region information)
    /// and postal code, then appends one street address range.
    fn read_basic_address_file(
        &self,
        registry: &mut PostalCodeRegistry,
        stats: &mut PassStats,
    ) -> Result<()> {
        let Some(path) = latest_data_file(&self.data_dir, BASIC_ADDRESS_FILE_PATTERN)? else {
            debug!(
                "No basic address file in {}; skipping pass",
                self.data_dir.display()
            );
            return Ok(());
        };
        info!("Reading basic addresses from {}", path.display());
        stats.file = Some(path.clone());

        for line in read_latin1_lines(&path)? {
            if line.trim().is_empty() {
                break;
            }
            stats.lines_read += 1;

            let Some(record) = StreetAddressRecord::decode(&line) else {
                stats.lines_skipped += 1;
                debug!("Skipping undecodable address line {}", stats.lines_read);
                continue;
            };

            registry.get_or_create_municipality(
                &record.municipality_code,
                record.running_date,
                RegionLink::Unknown,
                &record.municipality_name_fi,
                &record.municipality_name_sv,
                None,
            );
            let postal_code = registry.get_or_create_postal_code(
                &record.postal_code,
                record.running_date,
                &record.name_fi,
                &record.name_sv,
                &record.abbreviation_fi,
                &record.abbreviation_sv,
                record.entry_into_force,
                record.type_code,
            );
            postal_code.add_street_address_range(StreetAddressRange::new(
                record.running_date,
                record.municipality_code,
                record.street_name_fi,
                record.street_name_sv,
                record.address_range,
                record.parity,
                record.smallest_number,
                record.highest_number,
            ));
            stats.records_ingested += 1;
        }

        info!(
            "Address pass: {} records ingested, {} lines skipped",
            stats.records_ingested, stats.lines_skipped
        );
        Ok(())
    }
}
