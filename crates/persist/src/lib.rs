//! Inventory save/restore agent.
//!
//! Snapshots are an ordered list of `(item_name, quantity)` records, one
//! per slot, with empty slots stored as `("", 0)`. Restore is best-effort:
//! names missing from the catalog are logged and their slot left empty,
//! and the remaining slots still load.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use brewcraft_core::ItemCatalog;
use brewcraft_inventory::{Inventory, ItemStack};

/// One slot as persisted: item name plus quantity, `("", 0)` when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Catalog name of the item, or the empty string.
    pub item_name: String,
    /// Units in the slot.
    pub quantity: u32,
}

impl SlotRecord {
    fn empty() -> Self {
        Self {
            item_name: String::new(),
            quantity: 0,
        }
    }
}

/// Serialized form of a whole inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// Slot records in collection order.
    pub slots: Vec<SlotRecord>,
}

/// Errors raised while decoding or applying a snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Snapshot JSON could not be parsed or written.
    #[error("failed to decode inventory snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// Snapshot slot count does not match the live inventory.
    #[error("snapshot has {found} slots, inventory has {expected}")]
    SlotCountMismatch {
        /// Slots in the live inventory.
        expected: usize,
        /// Slots in the snapshot.
        found: usize,
    },
}

/// Capture the inventory as a snapshot. Stacks whose id is no longer in
/// the catalog are recorded as empty rather than dropped mid-list.
pub fn capture(inventory: &Inventory, catalog: &ItemCatalog) -> InventorySnapshot {
    let slots = inventory
        .slots()
        .iter()
        .map(|slot| match slot {
            Some(stack) => match catalog.name(stack.item) {
                Some(name) => SlotRecord {
                    item_name: name.to_string(),
                    quantity: stack.count,
                },
                None => {
                    tracing::warn!(item = stack.item, "captured stack has no catalog entry");
                    SlotRecord::empty()
                }
            },
            None => SlotRecord::empty(),
        })
        .collect();
    InventorySnapshot { slots }
}

/// Apply a snapshot to the inventory, resolving names through the catalog.
///
/// Unresolved names log a warning and leave the slot empty (the recorded
/// quantity is dropped). Quantities above the item's stack limit are
/// clamped. The inventory fires a single change notification.
pub fn restore(
    inventory: &mut Inventory,
    catalog: &ItemCatalog,
    snapshot: &InventorySnapshot,
) -> Result<(), PersistError> {
    if snapshot.slots.len() != inventory.len() {
        return Err(PersistError::SlotCountMismatch {
            expected: inventory.len(),
            found: snapshot.slots.len(),
        });
    }

    let slots: Vec<Option<ItemStack>> = snapshot
        .slots
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if record.item_name.is_empty() || record.quantity == 0 {
                return None;
            }
            let Some(id) = catalog.id_by_name(&record.item_name) else {
                tracing::warn!(
                    slot = index,
                    item = %record.item_name,
                    "item not found in catalog, leaving slot empty"
                );
                return None;
            };
            let limit = catalog.stack_limit(id).unwrap_or(1);
            let count = if record.quantity > limit {
                tracing::warn!(
                    slot = index,
                    item = %record.item_name,
                    quantity = record.quantity,
                    limit,
                    "clamping over-limit quantity"
                );
                limit
            } else {
                record.quantity
            };
            Some(ItemStack::new(id, count))
        })
        .collect();

    // Length was checked above, so this cannot fail.
    inventory.replace_slots(slots);
    Ok(())
}

/// Encode a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &InventorySnapshot) -> Result<String, PersistError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Decode a snapshot from JSON.
pub fn from_json(input: &str) -> Result<InventorySnapshot, PersistError> {
    Ok(serde_json::from_str(input)?)
}
