//! Decider pipeline assembly.
//!
//! The pipeline is a fixed, ordered set of deciders. Lat/lon pairing runs
//! first by convention: it consumes two columns per result, so downstream
//! consumers treat its claims with priority over the single-column types.
//! Each decider owns its catalogs and working copies, so no cross-decider
//! claiming occurs.

use geocol_catalog::CatalogSet;
use geocol_model::{DetectionResults, SemanticType};

use crate::latlon::LatLonDecider;
use crate::single::SingleColumnDecider;

/// A member of the decider pipeline.
#[derive(Debug, Clone)]
pub enum Decider {
    /// The latitude/longitude pairing decider.
    LatLon(LatLonDecider),
    /// A single-column decider (MGRS, position, WKT geometry, or color).
    Single(SingleColumnDecider),
}

impl Decider {
    /// Runs detection over one header row.
    #[must_use]
    pub fn detect(&self, headers: &[String]) -> DetectionResults {
        match self {
            Self::LatLon(decider) => decider.detect(headers),
            Self::Single(decider) => decider.detect(headers),
        }
    }

    /// Short name for logs and CLI output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LatLon(_) => "lat/lon",
            Self::Single(decider) => decider.semantic().as_str(),
        }
    }
}

/// Builds the fixed decider sequence against one catalog source:
/// lat/lon pairing, then MGRS, position, WKT geometry, and color.
#[must_use]
pub fn build_deciders(catalogs: &CatalogSet) -> Vec<Decider> {
    vec![
        Decider::LatLon(LatLonDecider::new(&catalogs.lat, &catalogs.lon)),
        Decider::Single(SingleColumnDecider::new(SemanticType::Mgrs, &catalogs.mgrs)),
        Decider::Single(SingleColumnDecider::new(
            SemanticType::Position,
            &catalogs.position,
        )),
        Decider::Single(SingleColumnDecider::new(
            SemanticType::WktGeometry,
            &catalogs.wkt_geometry,
        )),
        Decider::Single(SingleColumnDecider::new(
            SemanticType::Color,
            &catalogs.color,
        )),
    ]
}
