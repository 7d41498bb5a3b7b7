//! Header-row ingestion and detection report assembly.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, info};

use geocol_catalog::CatalogSet;
use geocol_detect::build_deciders;
use geocol_model::DetectionResults;

/// Detection output for one decider.
#[derive(Debug, Clone, Serialize)]
pub struct DeciderReport {
    /// Decider name ("lat/lon", "mgrs", ...).
    pub decider: String,
    /// What the decider found.
    pub results: DetectionResults,
}

/// Full detection report over one header sample.
#[derive(Debug, Clone, Serialize)]
pub struct DetectReport {
    /// The header cells that were scanned.
    pub headers: Vec<String>,
    /// Per-decider output, in pipeline order.
    pub deciders: Vec<DeciderReport>,
}

impl DetectReport {
    /// Total candidates plus pairs found across all deciders.
    #[must_use]
    pub fn detection_count(&self) -> usize {
        self.deciders.iter().map(|entry| entry.results.len()).sum()
    }
}

/// Reads the header row of a delimited file.
///
/// The first record is taken as the header; cells are trimmed and stripped
/// of a leading BOM.
pub fn read_header_row(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let mut records = reader.records();
    let Some(record) = records.next() else {
        bail!("{} is empty: no header row", path.display());
    };
    let record = record.with_context(|| format!("read header row of {}", path.display()))?;
    Ok(record.iter().map(normalize_header).collect())
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Runs the full decider pipeline over one header sample.
#[must_use]
pub fn run_detection(catalogs: &CatalogSet, headers: &[String]) -> DetectReport {
    let deciders = build_deciders(catalogs);
    let mut entries = Vec::with_capacity(deciders.len());
    for decider in &deciders {
        let results = decider.detect(headers);
        debug!(
            decider = decider.name(),
            found = results.len(),
            "decider finished"
        );
        entries.push(DeciderReport {
            decider: decider.name().to_string(),
            results,
        });
    }
    let report = DetectReport {
        headers: headers.to_vec(),
        deciders: entries,
    };
    info!(
        header_count = report.headers.len(),
        detections = report.detection_count(),
        "detection complete"
    );
    report
}
