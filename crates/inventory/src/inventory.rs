use brewcraft_core::{ItemCatalog, ItemId};

use crate::events::{EventQueue, InventoryEvent};
use crate::stack::ItemStack;

/// Fixed-size ordered sequence of slots.
///
/// The slot count is set at construction and never changes for the life of
/// a session. Every mutating operation that changes at least one slot
/// enqueues a refresh request; bulk operations enqueue a single
/// [`InventoryEvent::Changed`] after all slots are updated so the UI can
/// batch its refresh.
#[derive(Debug)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
    events: EventQueue,
}

impl Inventory {
    /// Create an inventory with `size` empty slots.
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
            events: EventQueue::default(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the inventory has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `index` addresses a slot.
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    /// Contents of a slot (None for empty or out-of-range).
    pub fn get(&self, index: usize) -> Option<ItemStack> {
        self.slots.get(index).copied().flatten()
    }

    /// Read-only view of all slots, in order.
    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Pending refresh requests raised by mutations.
    pub fn events(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Replace a slot's contents. Zero-count stacks are normalized to
    /// empty. Returns false (no change) for out-of-range indices.
    pub fn set(&mut self, index: usize, stack: Option<ItemStack>) -> bool {
        if !self.in_bounds(index) {
            return false;
        }
        let stack = stack.filter(|s| s.count > 0);
        if self.slots[index] != stack {
            self.slots[index] = stack;
            self.events.push(InventoryEvent::SlotChanged(index));
        }
        true
    }

    /// Take a slot's contents, leaving it empty.
    pub fn take(&mut self, index: usize) -> Option<ItemStack> {
        let taken = self.slots.get_mut(index)?.take();
        if taken.is_some() {
            self.events.push(InventoryEvent::SlotChanged(index));
        }
        taken
    }

    /// Add `amount` units of an item, filling existing non-full stacks in
    /// slot order before empty slots. Returns the leftover that did not
    /// fit; the caller must not lose sight of it.
    pub fn add_item(&mut self, catalog: &ItemCatalog, item: ItemId, amount: u32) -> u32 {
        let Some(limit) = catalog.stack_limit(item) else {
            tracing::warn!(item, "add_item: unknown item id");
            return amount;
        };
        if amount == 0 {
            return 0;
        }

        let mut remaining = amount;

        // Top up existing stacks first.
        if catalog.is_stackable(item) {
            for slot in self.slots.iter_mut().flatten() {
                if slot.item == item && !slot.is_full(limit) {
                    remaining = slot.add_up_to(remaining, limit);
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }

        // Then fill empty slots.
        if remaining > 0 {
            for slot in &mut self.slots {
                if slot.is_none() {
                    let placed = remaining.min(limit);
                    *slot = Some(ItemStack::new(item, placed));
                    remaining -= placed;
                    if remaining == 0 {
                        break;
                    }
                }
            }
        }

        if remaining < amount {
            self.events.push(InventoryEvent::Changed);
        }
        if remaining > 0 {
            tracing::warn!(item, leftover = remaining, "inventory full, could not add all units");
        }
        remaining
    }

    /// Remove up to `amount` units of an item, scanning slots in order and
    /// clearing emptied slots. Returns the amount actually removed; a
    /// shortfall is visible as `removed < amount`.
    pub fn remove_item(&mut self, item: ItemId, amount: u32) -> u32 {
        let mut remaining = amount;
        for slot in &mut self.slots {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = slot {
                if stack.item == item {
                    remaining -= stack.remove_up_to(remaining);
                    if stack.count == 0 {
                        *slot = None;
                    }
                }
            }
        }

        let removed = amount - remaining;
        if removed > 0 {
            self.events.push(InventoryEvent::Changed);
        }
        removed
    }

    /// Empty every slot unconditionally.
    pub fn clear_all(&mut self) {
        let had_items = self.slots.iter().any(|s| s.is_some());
        self.slots.iter_mut().for_each(|s| *s = None);
        if had_items {
            self.events.push(InventoryEvent::Changed);
        }
    }

    /// Replace all slots at once (used by the persistence layer). Fails
    /// without mutation when the slot count differs.
    pub fn replace_slots(&mut self, slots: Vec<Option<ItemStack>>) -> bool {
        if slots.len() != self.slots.len() {
            return false;
        }
        self.slots = slots
            .into_iter()
            .map(|s| s.filter(|stack| stack.count > 0))
            .collect();
        self.events.push(InventoryEvent::Changed);
        true
    }

    /// Total units of an item across all slots.
    pub fn count_item(&self, item: ItemId) -> u32 {
        self.slots
            .iter()
            .flatten()
            .filter(|stack| stack.item == item)
            .map(|stack| stack.count)
            .sum()
    }

    /// Whether at least `amount` units of an item are present.
    pub fn has_item(&self, item: ItemId, amount: u32) -> bool {
        self.count_item(item) >= amount
    }

    /// Number of empty slots.
    pub fn empty_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewcraft_core::{ItemCatalog, ItemDef};

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            ItemDef::stackable("coffee_bean", 64),
            ItemDef::stackable("sugar", 64),
            ItemDef::unstackable("mug"),
        ])
        .unwrap()
    }

    const BEAN: ItemId = 0;
    const SUGAR: ItemId = 1;
    const MUG: ItemId = 2;

    #[test]
    fn add_fills_existing_before_empty() {
        let catalog = catalog();
        let mut inv = Inventory::new(4);

        assert_eq!(inv.add_item(&catalog, BEAN, 32), 0);
        assert_eq!(inv.add_item(&catalog, BEAN, 32), 0);
        assert_eq!(inv.get(0), Some(ItemStack::new(BEAN, 64)));
        assert_eq!(inv.get(1), None);

        // First slot full, next unit opens a new slot.
        assert_eq!(inv.add_item(&catalog, BEAN, 1), 0);
        assert_eq!(inv.get(1), Some(ItemStack::new(BEAN, 1)));
    }

    #[test]
    fn add_reports_leftover_when_full() {
        let catalog = catalog();
        let mut inv = Inventory::new(2);

        assert_eq!(inv.add_item(&catalog, BEAN, 150), 22);
        assert_eq!(inv.count_item(BEAN), 128);
        assert_eq!(inv.empty_slots(), 0);
    }

    #[test]
    fn add_unknown_item_is_rejected() {
        let catalog = catalog();
        let mut inv = Inventory::new(2);
        assert_eq!(inv.add_item(&catalog, 99, 5), 5);
        assert_eq!(inv.empty_slots(), 2);
    }

    #[test]
    fn unstackable_items_take_one_slot_each() {
        let catalog = catalog();
        let mut inv = Inventory::new(3);

        assert_eq!(inv.add_item(&catalog, MUG, 2), 0);
        assert_eq!(inv.get(0), Some(ItemStack::new(MUG, 1)));
        assert_eq!(inv.get(1), Some(ItemStack::new(MUG, 1)));
        assert_eq!(inv.add_item(&catalog, MUG, 3), 2);
    }

    #[test]
    fn remove_drains_in_slot_order() {
        let catalog = catalog();
        let mut inv = Inventory::new(4);
        inv.add_item(&catalog, BEAN, 64);
        inv.add_item(&catalog, SUGAR, 10);
        inv.add_item(&catalog, BEAN, 32);

        assert_eq!(inv.remove_item(BEAN, 80), 80);
        assert_eq!(inv.get(0), None);
        assert_eq!(inv.get(2), Some(ItemStack::new(BEAN, 16)));
        assert_eq!(inv.count_item(SUGAR), 10);
    }

    #[test]
    fn remove_reports_shortfall() {
        let catalog = catalog();
        let mut inv = Inventory::new(2);
        inv.add_item(&catalog, BEAN, 10);

        assert_eq!(inv.remove_item(BEAN, 25), 10);
        assert_eq!(inv.count_item(BEAN), 0);
    }

    #[test]
    fn clear_all_empties_every_slot() {
        let catalog = catalog();
        let mut inv = Inventory::new(3);
        inv.add_item(&catalog, BEAN, 100);
        inv.clear_all();

        assert_eq!(inv.empty_slots(), 3);
        assert!(!inv.has_item(BEAN, 1));
    }

    #[test]
    fn bulk_ops_fire_single_changed_event() {
        let catalog = catalog();
        let mut inv = Inventory::new(4);
        inv.add_item(&catalog, BEAN, 150); // spans three slots

        let events: Vec<_> = inv.events().drain().collect();
        assert_eq!(events, vec![InventoryEvent::Changed]);

        // A no-op removal stays silent.
        inv.remove_item(SUGAR, 5);
        assert!(inv.events().is_empty());
    }

    #[test]
    fn set_normalizes_zero_count_to_empty() {
        let mut inv = Inventory::new(2);
        assert!(inv.set(0, Some(ItemStack { item: BEAN, count: 0 })));
        assert_eq!(inv.get(0), None);
        assert!(!inv.set(5, None));
    }

    #[test]
    fn replace_slots_requires_matching_length() {
        let mut inv = Inventory::new(2);
        assert!(!inv.replace_slots(vec![None; 3]));
        assert!(inv.replace_slots(vec![Some(ItemStack::new(BEAN, 4)), None]));
        assert_eq!(inv.get(0), Some(ItemStack::new(BEAN, 4)));
    }
}
