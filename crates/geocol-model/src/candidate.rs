//! Candidate column types produced by the detection engine.

use serde::{Deserialize, Serialize};

use crate::semantic::SemanticType;

/// One candidate mapping of a header cell to a semantic type.
///
/// Candidates are value objects created fresh per detection run. Only the
/// confidence is mutable after construction; the lat/lon pairing search may
/// adjust it while pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnCandidate {
    /// Original header text, preserved verbatim.
    pub column_name: String,
    /// Detected semantic role.
    pub semantic_type: SemanticType,
    /// Leading non-alias remainder of the column name (empty for exact matches).
    pub prefix: String,
    /// Trailing non-alias remainder of the column name (empty for exact matches).
    pub suffix: String,
    /// True if the matched alias came from the long (descriptive) catalog.
    pub is_long_alias: bool,
    /// Zero-based position of the matched cell in the original header row.
    pub column_index: usize,
    /// Match quality in `[0, 1]`.
    pub confidence: f32,
}

impl ColumnCandidate {
    /// Creates a candidate with empty remainders (an exact match).
    #[must_use]
    pub fn exact(
        column_name: impl Into<String>,
        semantic_type: SemanticType,
        column_index: usize,
        confidence: f32,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            semantic_type,
            prefix: String::new(),
            suffix: String::new(),
            is_long_alias: false,
            column_index,
            confidence,
        }
    }

    /// True if the match consumed the whole header cell.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty()
    }
}
