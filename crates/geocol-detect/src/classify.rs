//! Match classification between a header cell and a known alias.
//!
//! Comparison is ASCII case-insensitive. The compare types are tested in
//! priority order (`Equals`, `StartsWith`, `EndsWith`, `Contains`); the
//! first one that applies wins and no weaker type is considered for that
//! alias.

/// How a header cell relates to a known alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompareType {
    /// Case-insensitive full-string equality.
    Equals,
    /// The cell starts with the alias.
    StartsWith,
    /// The cell ends with the alias.
    EndsWith,
    /// The alias occurs somewhere inside the cell.
    Contains,
}

/// A successful classification, carrying the non-alias remainders of the
/// cell for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    /// The strongest applicable compare type.
    pub compare: CompareType,
    /// Leading remainder of the cell before the alias (empty unless the
    /// match was `EndsWith` or `Contains`).
    pub prefix: String,
    /// Trailing remainder of the cell after the alias (empty unless the
    /// match was `StartsWith` or `Contains`).
    pub suffix: String,
}

/// Returns the strongest applicable [`CompareType`] for the cell/alias
/// pair, or `None` when the alias does not occur in the cell at all.
#[must_use]
pub fn classify(cell: &str, alias: &str) -> Option<AliasMatch> {
    if alias.is_empty() {
        return None;
    }
    // ASCII lowercasing preserves byte length, so remainder offsets computed
    // on the folded strings slice the original cell safely.
    let cell_folded = cell.to_ascii_lowercase();
    let alias_folded = alias.to_ascii_lowercase();

    if cell_folded == alias_folded {
        return Some(AliasMatch {
            compare: CompareType::Equals,
            prefix: String::new(),
            suffix: String::new(),
        });
    }
    if cell_folded.starts_with(&alias_folded) {
        return Some(AliasMatch {
            compare: CompareType::StartsWith,
            prefix: String::new(),
            suffix: cell[alias.len()..].to_string(),
        });
    }
    if cell_folded.ends_with(&alias_folded) {
        return Some(AliasMatch {
            compare: CompareType::EndsWith,
            prefix: cell[..cell.len() - alias.len()].to_string(),
            suffix: String::new(),
        });
    }
    if let Some(position) = cell_folded.find(&alias_folded) {
        return Some(AliasMatch {
            compare: CompareType::Contains,
            prefix: cell[..position].to_string(),
            suffix: cell[position + alias.len()..].to_string(),
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_case_insensitive() {
        let matched = classify("COLOR", "color").expect("match");
        assert_eq!(matched.compare, CompareType::Equals);
        assert!(matched.prefix.is_empty());
        assert!(matched.suffix.is_empty());
    }

    #[test]
    fn prefix_match_keeps_trailing_remainder() {
        let matched = classify("Latitude_deg", "Latitude").expect("match");
        assert_eq!(matched.compare, CompareType::StartsWith);
        assert_eq!(matched.suffix, "_deg");
        assert!(matched.prefix.is_empty());
    }

    #[test]
    fn suffix_match_keeps_leading_remainder() {
        let matched = classify("geo_latitude", "latitude").expect("match");
        assert_eq!(matched.compare, CompareType::EndsWith);
        assert_eq!(matched.prefix, "geo_");
        assert!(matched.suffix.is_empty());
    }

    #[test]
    fn interior_match_keeps_both_remainders() {
        let matched = classify("grid_mgrs_zone", "mgrs").expect("match");
        assert_eq!(matched.compare, CompareType::Contains);
        assert_eq!(matched.prefix, "grid_");
        assert_eq!(matched.suffix, "_zone");
    }

    #[test]
    fn equals_beats_starts_with_for_identical_strings() {
        // "lat" both equals and starts with "lat"; Equals must win.
        let matched = classify("lat", "lat").expect("match");
        assert_eq!(matched.compare, CompareType::Equals);
    }

    #[test]
    fn no_occurrence_yields_none() {
        assert!(classify("user_id", "latitude").is_none());
        assert!(classify("la", "lat").is_none());
    }

    #[test]
    fn empty_alias_never_matches() {
        assert!(classify("anything", "").is_none());
        assert!(classify("", "").is_none());
    }
}
