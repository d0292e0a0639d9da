//! Ingestion pipeline for Posti data files
//!
//! This module orchestrates the two-pass build of the entity graph: the
//! postal code metadata file first, then the basic address file. Each pass
//! reads the newest file of its family from the data directory; a missing
//! file simply skips the pass, producing a partially empty graph.
//!
//! ## Architecture
//!
//! - [`pipeline`] - Pass orchestration and per-line record handling
//! - [`stats`] - Ingestion statistics collected per pass

pub mod pipeline;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use pipeline::IngestPipeline;
pub use stats::{IngestStats, PassStats};

use crate::Result;
use crate::app::services::registry::PostalCodeRegistry;
use std::path::Path;
use std::sync::OnceLock;

static SHARED_REGISTRY: OnceLock<PostalCodeRegistry> = OnceLock::new();

/// Process-wide memoized entity graph.
///
/// The first call ingests the data files from `data_dir`; every later call
/// returns the already-built graph without touching the filesystem, even
/// when given a different directory. Use [`IngestPipeline::load`] directly
/// for an isolated build.
pub fn shared_registry(data_dir: &Path) -> Result<&'static PostalCodeRegistry> {
    if let Some(registry) = SHARED_REGISTRY.get() {
        return Ok(registry);
    }
    let (registry, _stats) = IngestPipeline::new(data_dir).load()?;
    Ok(SHARED_REGISTRY.get_or_init(|| registry))
}
