//! Latitude/longitude pairing decider.
//!
//! Runs the single-column scan twice over one shared cell pool (latitude
//! catalog first, then longitude), then searches the full candidate cross
//! product for compatible pairs.

use std::collections::BTreeSet;

use tracing::debug;

use geocol_catalog::NameCatalog;
use geocol_model::{DetectionResults, LatLonPair, SemanticType};

use crate::classify::{AliasMatch, CompareType};
use crate::single::{cell_pool, scan_pool, scored_confidence};

/// Flat confidence for an exact match against a reserved key.
const SPECIAL_EQUALS_CONFIDENCE: f32 = 1.0;
/// Flat confidence for a prefix or suffix match against a reserved key.
const SPECIAL_AFFIX_CONFIDENCE: f32 = 0.92;
/// Flat confidence for a substring match against a reserved key.
const SPECIAL_CONTAINS_CONFIDENCE: f32 = 0.85;
/// Maximum tolerated confidence gap between the two sides of a pair.
const DELTA_CONFIDENCE_MAX: f32 = 0.2;

/// Decider that pairs latitude candidates with longitude candidates.
#[derive(Debug, Clone)]
pub struct LatLonDecider {
    lat: NameCatalog,
    lon: NameCatalog,
}

impl LatLonDecider {
    /// Builds the decider from the latitude and longitude catalogs.
    #[must_use]
    pub fn new(lat: &NameCatalog, lon: &NameCatalog) -> Self {
        Self {
            lat: lat.clone(),
            lon: lon.clone(),
        }
    }

    /// Detects latitude/longitude pairs in the header row.
    ///
    /// The two candidate scans share one pool, so a cell claimed as a
    /// latitude cannot also be claimed as a longitude. Pair order follows
    /// the cross product with the latitude candidates as the outer loop.
    #[must_use]
    pub fn detect(&self, headers: &[String]) -> DetectionResults {
        let mut pool = cell_pool(headers);
        let lat_candidates = scan_side(&mut pool, SemanticType::Lat, &self.lat);
        let lon_candidates = scan_side(&mut pool, SemanticType::Lon, &self.lon);

        let mut pairs: Vec<LatLonPair> = Vec::new();
        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
        for lat in &lat_candidates {
            for lon in &lon_candidates {
                let delta = (lat.confidence - lon.confidence).abs();
                if delta >= DELTA_CONFIDENCE_MAX {
                    debug!(
                        lat = %lat.column_name,
                        lon = %lon.column_name,
                        delta,
                        "pair rejected: confidence gap too wide"
                    );
                    continue;
                }
                let key = (lat.column_name.clone(), lon.column_name.clone());
                if seen.contains(&key) {
                    continue;
                }
                let pair = LatLonPair::new(lat.clone(), lon.clone());
                if pair.confidence > 0 {
                    seen.insert(key);
                    pairs.push(pair);
                }
            }
        }
        DetectionResults::Pairs { pairs }
    }
}

/// Scans one side's catalog over the shared pool.
///
/// Matches against a reserved key score with the flat canonical constants;
/// matches against long/short aliases use the generic fractional scheme
/// with the long-name bonus.
fn scan_side(
    pool: &mut Vec<(usize, String)>,
    semantic: SemanticType,
    catalog: &NameCatalog,
) -> Vec<geocol_model::ColumnCandidate> {
    let known_names: Vec<String> = catalog.known_names().map(str::to_string).collect();
    scan_pool(pool, semantic, &known_names, |alias, matched| {
        score_alias(catalog, alias, matched)
    })
}

fn score_alias(catalog: &NameCatalog, alias: &str, matched: &AliasMatch) -> (f32, bool) {
    let is_long = catalog.is_long(alias);
    if catalog.is_special(alias) {
        let confidence = match matched.compare {
            CompareType::Equals => SPECIAL_EQUALS_CONFIDENCE,
            CompareType::StartsWith | CompareType::EndsWith => SPECIAL_AFFIX_CONFIDENCE,
            CompareType::Contains => SPECIAL_CONTAINS_CONFIDENCE,
        };
        return (confidence, is_long);
    }
    (scored_confidence(matched.compare, is_long), is_long)
}
