//! TOML catalog loading.
//!
//! Catalog files are TOML tables keyed by semantic type:
//!
//! ```toml
//! [lat]
//! special = ["LAT"]
//! long = ["latitude"]
//! short = ["lat"]
//! ```
//!
//! Semantic types missing from the file keep the built-in defaults.

use std::fs;
use std::path::Path;

use crate::catalog::CatalogSet;
use crate::error::CatalogError;

/// Loads a [`CatalogSet`] from a TOML file, falling back to built-in
/// defaults for any semantic type the file does not mention.
pub fn load_catalog_set(path: &Path) -> Result<CatalogSet, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))?;
    let set: CatalogSet = toml::from_str(&contents).map_err(|source| CatalogError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    for (semantic, catalog) in set.entries() {
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog {
                semantic: semantic.to_string(),
            });
        }
    }
    Ok(set)
}
