//! Item catalog keyed by id, with name and group lookups.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::item::{ItemDef, ItemId};

/// Errors emitted while building a catalog from an item pack.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Wrap IO errors when reading packs.
    #[error("failed to read item pack: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse item pack: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two definitions share the same name.
    #[error("duplicate item name: {0}")]
    DuplicateName(String),
    /// More definitions than ItemId can address.
    #[error("item pack too large: {0} definitions")]
    TooManyItems(usize),
}

/// Registry storing item definitions keyed by id.
///
/// Read-only after construction; shared between the inventory core and the
/// persistence layer behind an `Arc`.
#[derive(Debug)]
pub struct ItemCatalog {
    defs: Vec<ItemDef>,
    name_to_id: HashMap<String, ItemId>,
}

impl ItemCatalog {
    /// Construct a catalog from the supplied definitions.
    pub fn new(defs: Vec<ItemDef>) -> Result<Self, CatalogError> {
        if defs.len() > ItemId::MAX as usize + 1 {
            return Err(CatalogError::TooManyItems(defs.len()));
        }
        let mut name_to_id = HashMap::new();
        for (id, def) in defs.iter().enumerate() {
            if name_to_id.insert(def.name.clone(), id as ItemId).is_some() {
                return Err(CatalogError::DuplicateName(def.name.clone()));
            }
        }
        Ok(Self { defs, name_to_id })
    }

    /// Look up a definition by numeric id.
    pub fn def(&self, id: ItemId) -> Option<&ItemDef> {
        self.defs.get(id as usize)
    }

    /// Resolve an item id by its name.
    pub fn id_by_name(&self, name: &str) -> Option<ItemId> {
        self.name_to_id.get(name).copied()
    }

    /// Item name for an id, if registered.
    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.def(id).map(|d| d.name.as_str())
    }

    /// Effective per-slot capacity for an item (None for unknown ids).
    pub fn stack_limit(&self, id: ItemId) -> Option<u32> {
        self.def(id).map(|d| d.stack_limit())
    }

    /// Whether an item stacks (unknown ids report false).
    pub fn is_stackable(&self, id: ItemId) -> bool {
        self.def(id).map(|d| d.stackable).unwrap_or(false)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when no definitions are registered.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Distinct group labels, in first-seen order.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for def in &self.defs {
            if let Some(group) = def.group.as_deref() {
                if !names.contains(&group) {
                    names.push(group);
                }
            }
        }
        names
    }

    /// Ids of all items in a group, in catalog order.
    pub fn items_in_group(&self, group: &str) -> Vec<ItemId> {
        self.defs
            .iter()
            .enumerate()
            .filter(|(_, d)| d.group.as_deref() == Some(group))
            .map(|(id, _)| id as ItemId)
            .collect()
    }
}

/// Parse a JSON string into a catalog.
pub fn catalog_from_str(input: &str) -> Result<ItemCatalog, CatalogError> {
    let defs: Vec<ItemDef> = serde_json::from_str(input)?;
    ItemCatalog::new(defs)
}

/// Load a catalog from a JSON file on disk.
pub fn catalog_from_file(path: &Path) -> Result<ItemCatalog, CatalogError> {
    let contents = fs::read_to_string(path)?;
    catalog_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ItemCatalog {
        ItemCatalog::new(vec![
            ItemDef {
                group: Some("ingredients".into()),
                ..ItemDef::stackable("coffee_bean", 64)
            },
            ItemDef {
                group: Some("ingredients".into()),
                ..ItemDef::stackable("sugar", 64)
            },
            ItemDef {
                group: Some("crockery".into()),
                ..ItemDef::unstackable("mug")
            },
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_name_and_id() {
        let catalog = sample();
        let bean = catalog.id_by_name("coffee_bean").unwrap();
        assert_eq!(catalog.name(bean), Some("coffee_bean"));
        assert_eq!(catalog.stack_limit(bean), Some(64));
        assert!(catalog.id_by_name("latte").is_none());
        assert_eq!(catalog.stack_limit(999), None);
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = ItemCatalog::new(vec![
            ItemDef::stackable("sugar", 64),
            ItemDef::stackable("sugar", 16),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "sugar"));
    }

    #[test]
    fn groups_listed_in_order() {
        let catalog = sample();
        assert_eq!(catalog.group_names(), vec!["ingredients", "crockery"]);
        assert_eq!(catalog.items_in_group("ingredients"), vec![0, 1]);
        assert!(catalog.items_in_group("unknown").is_empty());
    }

    #[test]
    fn parse_from_json() {
        let catalog = catalog_from_str(
            r#"[
                {"name": "coffee_bean", "max_stack": 64},
                {"name": "mug", "stackable": false}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.stack_limit(1), Some(1));
    }
}
