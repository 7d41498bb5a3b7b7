//! Aggregated results of a single decider invocation.

use serde::{Deserialize, Serialize};

use crate::candidate::ColumnCandidate;
use crate::semantic::SemanticType;

/// A latitude column paired with a longitude column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLonPair {
    /// The latitude candidate.
    pub lat: ColumnCandidate,
    /// The longitude candidate.
    pub lon: ColumnCandidate,
    /// Combined confidence as an integer percentage in `[0, 100]`.
    pub confidence: u8,
}

impl LatLonPair {
    /// Builds a pair, computing the combined percentage confidence as
    /// `round(100 * (lat + lon) / 2)`.
    #[must_use]
    pub fn new(lat: ColumnCandidate, lon: ColumnCandidate) -> Self {
        let confidence = combined_confidence(lat.confidence, lon.confidence);
        Self {
            lat,
            lon,
            confidence,
        }
    }

    /// Identity for de-duplication: the pair of column names, not object
    /// identity.
    #[must_use]
    pub fn name_key(&self) -> (&str, &str) {
        (&self.lat.column_name, &self.lon.column_name)
    }
}

/// Combined percentage confidence for a lat/lon pair.
#[must_use]
pub fn combined_confidence(lat: f32, lon: f32) -> u8 {
    let percent = (100.0 * (lat + lon) / 2.0).round();
    percent.clamp(0.0, 100.0) as u8
}

/// Output of one decider run over one header sample.
///
/// Single-semantic deciders populate candidates; the lat/lon pairing decider
/// populates pairs. A result never holds a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DetectionResults {
    /// Candidates from a single-semantic decider.
    Columns {
        /// The semantic type the decider was scanning for.
        semantic_type: SemanticType,
        /// Matched candidates, at most one per header cell.
        candidates: Vec<ColumnCandidate>,
    },
    /// Paired results from the lat/lon decider.
    Pairs {
        /// Admissible latitude/longitude pairs.
        pairs: Vec<LatLonPair>,
    },
}

impl DetectionResults {
    /// An empty single-column result for the given semantic type.
    #[must_use]
    pub fn empty_columns(semantic_type: SemanticType) -> Self {
        Self::Columns {
            semantic_type,
            candidates: Vec::new(),
        }
    }

    /// True when the decider found nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Columns { candidates, .. } => candidates.is_empty(),
            Self::Pairs { pairs } => pairs.is_empty(),
        }
    }

    /// Number of candidates or pairs held.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Columns { candidates, .. } => candidates.len(),
            Self::Pairs { pairs } => pairs.len(),
        }
    }
}
