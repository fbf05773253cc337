//! End-to-end smoke test: a play session with bulk adds, gestures, and a
//! save/load round trip through a real file.

use std::fs;

use brewcraft_inventory::{CursorController, Inventory};
use brewcraft_persist::{capture, from_json, restore, to_json};
use brewcraft_testkit::{fixture_catalog, item, total_units};

#[test]
fn session_with_save_and_reload() {
    let catalog = fixture_catalog();
    let bean = item(&catalog, "coffee_bean");
    let sugar = item(&catalog, "sugar");

    let mut cursor = CursorController::new(Inventory::new(9), catalog.clone());

    assert_eq!(cursor.add_item(bean, 80), 0); // 64 + 16
    assert_eq!(cursor.add_item(sugar, 7), 0);

    // Shuffle things around with gestures.
    cursor.primary_click(1); // pick up 16 beans
    cursor.drag_start(4);
    cursor.drag_over(5);
    cursor.drag_release(); // shares are [6, 5], 5 stays in hand
    cursor.primary_click(8); // park the rest

    assert_eq!(total_units(&cursor, bean), 80);
    assert_eq!(total_units(&cursor, sugar), 7);
    assert!(!cursor.is_holding());

    // Round trip through disk.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let snapshot = capture(cursor.inventory(), &catalog);
    fs::write(&path, to_json(&snapshot).unwrap()).unwrap();

    cursor.inventory_mut().clear_all();
    assert_eq!(cursor.inventory().count_item(bean), 0);

    let loaded = from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    restore(cursor.inventory_mut(), &catalog, &loaded).unwrap();

    assert_eq!(cursor.inventory().count_item(bean), 80);
    assert_eq!(cursor.inventory().count_item(sugar), 7);
    assert_eq!(cursor.inventory().slots(), snapshot_slots(&cursor, &snapshot));
}

// Rebuild the expected slot layout from the snapshot for comparison.
fn snapshot_slots(
    cursor: &CursorController,
    snapshot: &brewcraft_persist::InventorySnapshot,
) -> Vec<Option<brewcraft_inventory::ItemStack>> {
    snapshot
        .slots
        .iter()
        .map(|record| {
            if record.item_name.is_empty() {
                None
            } else {
                let id = cursor.catalog().id_by_name(&record.item_name).unwrap();
                Some(brewcraft_inventory::ItemStack::new(id, record.quantity))
            }
        })
        .collect()
}
