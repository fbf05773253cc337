#![warn(missing_docs)]
//! Shared fixtures for inventory tests.

use std::sync::Arc;

use brewcraft_core::{ItemCatalog, ItemDef, ItemId};
use brewcraft_inventory::{CursorController, Inventory, ItemStack};

/// Standard fixture catalog used across the workspace's tests.
///
/// Layout: `coffee_bean` (64), `sugar` (10), `oat_milk` (16), `mug`
/// (non-stackable). The small sugar limit keeps cap/overflow cases easy
/// to hit.
pub fn fixture_catalog() -> Arc<ItemCatalog> {
    Arc::new(
        ItemCatalog::new(vec![
            ItemDef {
                group: Some("ingredients".into()),
                ..ItemDef::stackable("coffee_bean", 64)
            },
            ItemDef {
                group: Some("ingredients".into()),
                ..ItemDef::stackable("sugar", 10)
            },
            ItemDef {
                group: Some("ingredients".into()),
                ..ItemDef::stackable("oat_milk", 16)
            },
            ItemDef {
                group: Some("crockery".into()),
                ..ItemDef::unstackable("mug")
            },
        ])
        .expect("fixture catalog is well-formed"),
    )
}

/// Resolve a fixture item by name, panicking on typos in tests.
pub fn item(catalog: &ItemCatalog, name: &str) -> ItemId {
    catalog
        .id_by_name(name)
        .unwrap_or_else(|| panic!("fixture item {name:?} not in catalog"))
}

/// Build a cursor controller over an inventory seeded with `(index,
/// stack)` pairs.
pub fn seeded_cursor(
    catalog: Arc<ItemCatalog>,
    size: usize,
    contents: &[(usize, ItemStack)],
) -> CursorController {
    let mut inventory = Inventory::new(size);
    for &(index, stack) in contents {
        assert!(inventory.set(index, Some(stack)), "seed index {index} out of range");
    }
    inventory.events().drain().for_each(drop);
    CursorController::new(inventory, catalog)
}

/// Total units of an item across the inventory and the hand; the quantity
/// gestures must conserve.
pub fn total_units(cursor: &CursorController, item: ItemId) -> u32 {
    let held = cursor
        .held()
        .filter(|stack| stack.item == item)
        .map(|stack| stack.count)
        .unwrap_or(0);
    cursor.inventory().count_item(item) + held
}
