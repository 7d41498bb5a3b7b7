//! Single-column decider: scans header cells against one semantic type's
//! known-name catalog, producing at most one scored candidate per cell.

use tracing::debug;

use geocol_catalog::NameCatalog;
use geocol_model::{ColumnCandidate, DetectionResults, SemanticType};

use crate::classify::{AliasMatch, CompareType, classify};

const EQUALS_CONFIDENCE: f32 = 1.0;
const STARTS_WITH_CONFIDENCE: f32 = 1.0 / 2.0;
const ENDS_WITH_CONFIDENCE: f32 = 1.0 / 3.0;
const CONTAINS_CONFIDENCE: f32 = 1.0 / 6.0;
/// Multiplier applied when the matched alias is a descriptive (long) name.
pub(crate) const LONG_NAME_BONUS: f32 = 1.4;

/// Confidence under the generic fractional scheme. Exact matches score a
/// flat 1.0; the long-name bonus only lifts partial matches.
pub(crate) fn scored_confidence(compare: CompareType, is_long: bool) -> f32 {
    let base = match compare {
        CompareType::Equals => return EQUALS_CONFIDENCE,
        CompareType::StartsWith => STARTS_WITH_CONFIDENCE,
        CompareType::EndsWith => ENDS_WITH_CONFIDENCE,
        CompareType::Contains => CONTAINS_CONFIDENCE,
    };
    if is_long { base * LONG_NAME_BONUS } else { base }
}

/// Working copy of the header row: `(index, name)` cells still available
/// for matching. Cells are removed as they are claimed, so a cell is never
/// matched twice within one scan (or, for lat/lon, across the two scans
/// that share a pool).
pub(crate) fn cell_pool(headers: &[String]) -> Vec<(usize, String)> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| (index, name.clone()))
        .collect()
}

/// Scans the pool against the known names, consuming matched cells.
///
/// Cells are visited last to first so removal does not disturb the indices
/// of cells not yet visited. For each cell the names are tried in catalog
/// order; the first name that classifies at all settles the cell, whether
/// or not it scores above zero.
pub(crate) fn scan_pool<F>(
    pool: &mut Vec<(usize, String)>,
    semantic: SemanticType,
    known_names: &[String],
    mut score: F,
) -> Vec<ColumnCandidate>
where
    F: FnMut(&str, &AliasMatch) -> (f32, bool),
{
    let mut candidates = Vec::new();
    for slot in (0..pool.len()).rev() {
        let (column_index, cell) = pool[slot].clone();
        for alias in known_names {
            let Some(matched) = classify(&cell, alias) else {
                continue;
            };
            let (confidence, is_long_alias) = score(alias, &matched);
            if confidence > 0.0 {
                debug!(
                    semantic = %semantic,
                    column = %cell,
                    alias = %alias,
                    compare = ?matched.compare,
                    confidence,
                    "claimed header cell"
                );
                candidates.push(ColumnCandidate {
                    column_name: cell.clone(),
                    semantic_type: semantic,
                    prefix: matched.prefix,
                    suffix: matched.suffix,
                    is_long_alias,
                    column_index,
                    confidence,
                });
                pool.remove(slot);
            }
            break;
        }
    }
    candidates
}

/// How a decider classifies an alias as a long (descriptive) name.
#[derive(Debug, Clone)]
enum LongNameRule {
    /// Every alias counts as long (MGRS has no abbreviation concept).
    Always,
    /// Only aliases in the dedicated long-name list count.
    Listed(Vec<String>),
}

impl LongNameRule {
    fn is_long(&self, alias: &str) -> bool {
        match self {
            Self::Always => true,
            Self::Listed(names) => names.iter().any(|name| name.eq_ignore_ascii_case(alias)),
        }
    }
}

/// Decider for one single-column semantic type (MGRS, position, WKT
/// geometry, or color).
#[derive(Debug, Clone)]
pub struct SingleColumnDecider {
    semantic: SemanticType,
    known_names: Vec<String>,
    long_rule: LongNameRule,
}

impl SingleColumnDecider {
    /// Builds a decider for the given semantic type from its catalog.
    ///
    /// The known-name sequence is the catalog's special keys followed by
    /// long then short aliases, preserving catalog order.
    #[must_use]
    pub fn new(semantic: SemanticType, catalog: &NameCatalog) -> Self {
        let known_names = catalog.known_names().map(str::to_string).collect();
        let long_rule = match semantic {
            SemanticType::Mgrs => LongNameRule::Always,
            _ => LongNameRule::Listed(catalog.long.clone()),
        };
        Self {
            semantic,
            known_names,
            long_rule,
        }
    }

    /// The semantic type this decider scans for.
    #[must_use]
    pub fn semantic(&self) -> SemanticType {
        self.semantic
    }

    /// Scans the header row and returns the matched candidates.
    ///
    /// An empty header yields an empty (never missing) result; unmatched
    /// cells are simply absent.
    #[must_use]
    pub fn detect(&self, headers: &[String]) -> DetectionResults {
        let mut pool = cell_pool(headers);
        let candidates = scan_pool(&mut pool, self.semantic, &self.known_names, |alias, m| {
            let is_long = self.long_rule.is_long(alias);
            (scored_confidence(m.compare, is_long), is_long)
        });
        DetectionResults::Columns {
            semantic_type: self.semantic,
            candidates,
        }
    }
}
