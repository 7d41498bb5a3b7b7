//! Alias catalogs consumed by the detection engine.
//!
//! A catalog carries three name sets per semantic type:
//! - `special`: reserved/canonical keys recognized verbatim,
//! - `long`: full descriptive aliases (e.g. "latitude"),
//! - `short`: abbreviations (e.g. "lat").
//!
//! Strings are stored case-sensitively and compared case-insensitively by
//! the engine. The catalogs are read-only for the lifetime of a decider.

use serde::{Deserialize, Serialize};

use geocol_model::SemanticType;

/// Alias lists for one semantic type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCatalog {
    /// Reserved/canonical keys.
    #[serde(default)]
    pub special: Vec<String>,
    /// Descriptive (long) aliases.
    #[serde(default)]
    pub long: Vec<String>,
    /// Abbreviated (short) aliases.
    #[serde(default)]
    pub short: Vec<String>,
}

impl NameCatalog {
    /// All known names in matching order: special keys first, then long,
    /// then short aliases.
    pub fn known_names(&self) -> impl Iterator<Item = &str> {
        self.special
            .iter()
            .chain(self.long.iter())
            .chain(self.short.iter())
            .map(String::as_str)
    }

    /// True if the alias appears in the long-name list (case-insensitive).
    #[must_use]
    pub fn is_long(&self, alias: &str) -> bool {
        self.long.iter().any(|name| name.eq_ignore_ascii_case(alias))
    }

    /// True if the alias is a reserved/canonical key (case-insensitive).
    #[must_use]
    pub fn is_special(&self, alias: &str) -> bool {
        self.special
            .iter()
            .any(|name| name.eq_ignore_ascii_case(alias))
    }

    /// True if no aliases are configured at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.special.is_empty() && self.long.is_empty() && self.short.is_empty()
    }

    fn from_parts(special: &[&str], long: &[&str], short: &[&str]) -> Self {
        Self {
            special: special.iter().map(|s| (*s).to_string()).collect(),
            long: long.iter().map(|s| (*s).to_string()).collect(),
            short: short.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// One [`NameCatalog`] per semantic type.
///
/// Deserializes from a TOML table keyed by semantic type; fields left out of
/// the file keep their built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSet {
    #[serde(default = "default_lat")]
    pub lat: NameCatalog,
    #[serde(default = "default_lon")]
    pub lon: NameCatalog,
    #[serde(default = "default_mgrs")]
    pub mgrs: NameCatalog,
    #[serde(default = "default_position")]
    pub position: NameCatalog,
    #[serde(default = "default_wkt_geometry")]
    pub wkt_geometry: NameCatalog,
    #[serde(default = "default_color")]
    pub color: NameCatalog,
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogSet {
    /// The built-in default catalogs.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            mgrs: default_mgrs(),
            position: default_position(),
            wkt_geometry: default_wkt_geometry(),
            color: default_color(),
        }
    }

    /// The catalog for one semantic type.
    #[must_use]
    pub fn get(&self, semantic: SemanticType) -> &NameCatalog {
        match semantic {
            SemanticType::Lat => &self.lat,
            SemanticType::Lon => &self.lon,
            SemanticType::Mgrs => &self.mgrs,
            SemanticType::Position => &self.position,
            SemanticType::WktGeometry => &self.wkt_geometry,
            SemanticType::Color => &self.color,
        }
    }

    /// All catalogs in semantic-type order.
    pub fn entries(&self) -> impl Iterator<Item = (SemanticType, &NameCatalog)> {
        [
            SemanticType::Lat,
            SemanticType::Lon,
            SemanticType::Mgrs,
            SemanticType::Position,
            SemanticType::WktGeometry,
            SemanticType::Color,
        ]
        .into_iter()
        .map(|semantic| (semantic, self.get(semantic)))
    }
}

fn default_lat() -> NameCatalog {
    NameCatalog::from_parts(&["LAT", "LATITUDE"], &["latitude"], &["lat"])
}

fn default_lon() -> NameCatalog {
    NameCatalog::from_parts(
        &["LON", "LONGITUDE"],
        &["longitude"],
        &["lon", "long", "lng"],
    )
}

fn default_mgrs() -> NameCatalog {
    NameCatalog::from_parts(&["MGRS"], &["mgrs", "milgrid"], &[])
}

fn default_position() -> NameCatalog {
    NameCatalog::from_parts(&["POSITION"], &["position", "location"], &["pos", "loc"])
}

fn default_wkt_geometry() -> NameCatalog {
    NameCatalog::from_parts(
        &["GEOMETRY"],
        &["geometry", "footprint"],
        &["geom", "wkt", "shape"],
    )
}

fn default_color() -> NameCatalog {
    NameCatalog::from_parts(&["COLOR"], &["color", "colour"], &[])
}
