use std::fmt;

use serde::{Deserialize, Serialize};

/// The column role being detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    /// Latitude coordinate column.
    Lat,
    /// Longitude coordinate column.
    Lon,
    /// Military Grid Reference System column.
    Mgrs,
    /// Free-text position column.
    Position,
    /// Well-Known Text geometry column.
    WktGeometry,
    /// Color column.
    Color,
}

impl SemanticType {
    /// Stable lowercase identifier, matching the serde representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lat => "lat",
            Self::Lon => "lon",
            Self::Mgrs => "mgrs",
            Self::Position => "position",
            Self::WktGeometry => "wkt_geometry",
            Self::Color => "color",
        }
    }

    /// Human-readable label used in CLI output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lat => "Latitude",
            Self::Lon => "Longitude",
            Self::Mgrs => "MGRS",
            Self::Position => "Position",
            Self::WktGeometry => "WKT Geometry",
            Self::Color => "Color",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
