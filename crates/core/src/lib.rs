#![warn(missing_docs)]
//! Core item primitives shared across the workspace.

mod catalog;
mod item;

pub use catalog::{catalog_from_file, catalog_from_str, CatalogError, ItemCatalog};
pub use item::{ItemDef, ItemId, DEFAULT_MAX_STACK};
