#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod loader;

pub use crate::catalog::{CatalogSet, NameCatalog};
pub use crate::error::CatalogError;
pub use crate::loader::load_catalog_set;
