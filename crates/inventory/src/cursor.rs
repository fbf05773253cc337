//! Cursor gesture state machine.
//!
//! Mediates all slot click/drag gestures while preserving item totals:
//! units move between slots and the hand but are never created or
//! destroyed. The hand is `Option<ItemStack>`, so a held stack with a
//! zero count cannot exist; every mutation that drains the hand clears it.

use std::sync::Arc;

use brewcraft_core::{ItemCatalog, ItemId};

use crate::drag::even_shares;
use crate::inventory::Inventory;
use crate::stack::ItemStack;

/// Two primary clicks on the same slot within this window count as a
/// double-click. Clicks on different slots never pair up.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 250;

/// Tracks primary-click timing for double-click detection.
#[derive(Debug, Default)]
struct DoubleClickTracker {
    last: Option<(usize, u64)>,
}

impl DoubleClickTracker {
    /// Record a click; returns true when it completes a double-click.
    fn observe(&mut self, index: usize, at_ms: u64, window_ms: u64) -> bool {
        let fired = matches!(
            self.last,
            Some((i, t)) if i == index && at_ms.saturating_sub(t) <= window_ms
        );
        // A fired pair is consumed; a third click starts a fresh pair.
        self.last = if fired { None } else { Some((index, at_ms)) };
        fired
    }
}

/// Ordered, deduplicated set of slots touched during a drag.
#[derive(Debug, Default)]
struct DragState {
    visited: Vec<usize>,
}

/// Converts pointer gestures into slot mutations.
///
/// Owns the slot collection for the life of a session; the catalog and UI
/// refresh queue are injected rather than reached through globals. All
/// gestures execute synchronously in delivery order.
#[derive(Debug)]
pub struct CursorController {
    inventory: Inventory,
    catalog: Arc<ItemCatalog>,
    held: Option<ItemStack>,
    drag: Option<DragState>,
    clicks: DoubleClickTracker,
    double_click_window_ms: u64,
}

impl CursorController {
    /// Create a controller over an inventory.
    pub fn new(inventory: Inventory, catalog: Arc<ItemCatalog>) -> Self {
        Self {
            inventory,
            catalog,
            held: None,
            drag: None,
            clicks: DoubleClickTracker::default(),
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
        }
    }

    /// Override the double-click window (milliseconds).
    pub fn set_double_click_window(&mut self, window_ms: u64) {
        self.double_click_window_ms = window_ms;
    }

    /// The slot collection, for rendering and bulk operations.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access for the boundary layers (bulk add/remove, restore).
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// The catalog this controller resolves stack limits against.
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog.
    pub fn catalog_arc(&self) -> Arc<ItemCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Bulk-add through the slot collection; returns the leftover that
    /// did not fit.
    pub fn add_item(&mut self, item: ItemId, amount: u32) -> u32 {
        let catalog = Arc::clone(&self.catalog);
        self.inventory.add_item(&catalog, item, amount)
    }

    /// Bulk-remove through the slot collection; returns the amount
    /// actually removed.
    pub fn remove_item(&mut self, item: ItemId, amount: u32) -> u32 {
        self.inventory.remove_item(item, amount)
    }

    /// Stack currently carried by the cursor, if any.
    pub fn held(&self) -> Option<ItemStack> {
        self.held
    }

    /// Whether the cursor is in the holding state.
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    /// Primary click with a caller-supplied timestamp; detects
    /// double-clicks and routes them to [`Self::double_click`].
    pub fn primary_click_at(&mut self, index: usize, at_ms: u64) {
        if self.clicks.observe(index, at_ms, self.double_click_window_ms) {
            self.double_click(index);
        } else {
            self.primary_click(index);
        }
    }

    /// Primary click: pick up, place, merge, or swap.
    pub fn primary_click(&mut self, index: usize) {
        if !self.inventory.in_bounds(index) {
            return;
        }
        let Some(held) = self.held else {
            // Empty hand: pick up the whole stack (no-op on empty slot).
            self.held = self.inventory.take(index);
            return;
        };

        match self.inventory.get(index) {
            None => {
                self.inventory.set(index, Some(held));
                self.held = None;
            }
            Some(target) if target.item == held.item && self.catalog.is_stackable(held.item) => {
                self.merge_into(index, target, held);
            }
            Some(target) => {
                // Different kind, or non-stackable same kind at capacity.
                self.inventory.set(index, Some(held));
                self.held = Some(target);
            }
        }
    }

    /// Secondary click: split pickup, place one unit, or swap.
    pub fn secondary_click(&mut self, index: usize) {
        if !self.inventory.in_bounds(index) {
            return;
        }
        let Some(mut held) = self.held else {
            // Empty hand: split off the ceiling half.
            if let Some(mut target) = self.inventory.get(index) {
                let taken = target.split_half();
                target.count -= taken;
                self.inventory.set(index, Some(target));
                self.held = Some(ItemStack::new(target.item, taken));
            }
            return;
        };

        match self.inventory.get(index) {
            None => {
                self.inventory.set(index, Some(ItemStack::new(held.item, 1)));
                self.drop_one(&mut held);
            }
            Some(mut target) if target.item == held.item => {
                let limit = self.stack_limit(held.item);
                if target.count < limit {
                    target.count += 1;
                    self.inventory.set(index, Some(target));
                    self.drop_one(&mut held);
                }
                // Same kind at capacity: uncovered gesture, no-op.
            }
            Some(target) => {
                self.inventory.set(index, Some(held));
                self.held = Some(target);
            }
        }
    }

    /// Double primary click: pick up (if the hand is empty), then gather
    /// all matching units from the rest of the inventory into the hand.
    pub fn double_click(&mut self, index: usize) {
        if !self.inventory.in_bounds(index) {
            return;
        }
        if self.held.is_none() {
            self.held = self.inventory.take(index);
        }
        self.gather();
    }

    /// Begin a distribute-drag. Ignored with an empty hand.
    pub fn drag_start(&mut self, index: usize) {
        if !self.is_holding() {
            return;
        }
        self.drag = Some(DragState::default());
        self.drag_over(index);
    }

    /// Extend the drag over another slot. Only empty slots and same-kind
    /// stacks below their limit are recorded.
    pub fn drag_over(&mut self, index: usize) {
        let Some(held) = self.held else { return };
        if !self.inventory.in_bounds(index) {
            return;
        }
        let limit = self.stack_limit(held.item);
        let compatible = match self.inventory.get(index) {
            None => true,
            Some(target) => {
                target.item == held.item
                    && self.catalog.is_stackable(held.item)
                    && target.count < limit
            }
        };
        if let Some(drag) = self.drag.as_mut() {
            if compatible && !drag.visited.contains(&index) {
                drag.visited.push(index);
            }
        }
    }

    /// Finish the drag: distribute the held quantity evenly across the
    /// visited slots plus one share that stays in hand. Remainder units go
    /// to earlier-visited slots; amounts that exceed a destination's
    /// capacity stay in hand rather than spilling to other slots.
    pub fn drag_release(&mut self) {
        let Some(drag) = self.drag.take() else { return };
        let Some(mut held) = self.held else { return };

        let limit = self.stack_limit(held.item);
        let shares = even_shares(held.count, drag.visited.len());
        for (&index, &share) in drag.visited.iter().zip(&shares) {
            if share == 0 {
                continue;
            }
            let placed = match self.inventory.get(index) {
                None => {
                    let placed = share.min(limit);
                    self.inventory.set(index, Some(ItemStack::new(held.item, placed)));
                    placed
                }
                Some(mut target) if target.item == held.item => {
                    let leftover = target.add_up_to(share, limit);
                    self.inventory.set(index, Some(target));
                    share - leftover
                }
                // Slot contents changed since it was visited; skip it.
                Some(_) => 0,
            };
            held.count -= placed;
        }

        self.held = (held.count > 0).then_some(held);
    }

    /// Abort the drag without distributing. Not reachable from the default
    /// gesture set; exposed so a binding layer can map a cancel key.
    pub fn drag_cancel(&mut self) {
        self.drag = None;
    }

    /// Pull matching-kind units from all slots into the hand, smallest
    /// stacks first (ties broken by slot order), until the hand is full.
    /// Slots already at their limit are left alone; drained slots clear.
    fn gather(&mut self) {
        let Some(mut held) = self.held else { return };
        let limit = self.stack_limit(held.item);
        if held.is_full(limit) {
            return;
        }

        let mut sources: Vec<(usize, u32)> = self
            .inventory
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|s| (i, s)))
            .filter(|(_, s)| s.item == held.item && !s.is_full(limit))
            .map(|(i, s)| (i, s.count))
            .collect();
        sources.sort_by_key(|&(index, count)| (count, index));

        for (index, count) in sources {
            let need = limit - held.count;
            if need == 0 {
                break;
            }
            let moved = need.min(count);
            held.count += moved;
            let rest = count - moved;
            self.inventory
                .set(index, (rest > 0).then(|| ItemStack::new(held.item, rest)));
        }

        self.held = Some(held);
    }

    fn merge_into(&mut self, index: usize, mut target: ItemStack, held: ItemStack) {
        let limit = self.stack_limit(held.item);
        let leftover = target.add_up_to(held.count, limit);
        self.inventory.set(index, Some(target));
        self.held = (leftover > 0).then(|| ItemStack::new(held.item, leftover));
    }

    fn drop_one(&mut self, held: &mut ItemStack) {
        held.count -= 1;
        self.held = (held.count > 0).then_some(*held);
    }

    // Unknown ids cannot be picked up from slots under normal operation;
    // fall back to a limit of 1 rather than panic.
    fn stack_limit(&self, item: ItemId) -> u32 {
        self.catalog.stack_limit(item).unwrap_or(1)
    }
}
