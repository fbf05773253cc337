use brewcraft_core::ItemId;
use serde::{Deserialize, Serialize};

/// A stack of items resident in a slot or carried by the cursor.
///
/// A stack always holds at least one unit; the empty cell is
/// `Option<ItemStack>::None`, so "item set with quantity zero" is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item type identifier.
    pub item: ItemId,
    /// Number of units in this stack.
    pub count: u32,
}

impl ItemStack {
    /// Create a new item stack.
    pub fn new(item: ItemId, count: u32) -> Self {
        debug_assert!(count > 0, "empty stacks are represented as None");
        Self { item, count }
    }

    /// Remaining space against a per-slot capacity.
    pub fn space_left(&self, limit: u32) -> u32 {
        limit.saturating_sub(self.count)
    }

    /// Whether this stack is at or above the given capacity.
    pub fn is_full(&self, limit: u32) -> bool {
        self.count >= limit
    }

    /// Add up to `amount` units without exceeding `limit`; returns the
    /// amount that did not fit.
    pub fn add_up_to(&mut self, amount: u32, limit: u32) -> u32 {
        let added = amount.min(self.space_left(limit));
        self.count += added;
        amount - added
    }

    /// Remove up to `amount` units; returns the amount actually removed.
    /// The caller clears the slot when the count reaches zero.
    pub fn remove_up_to(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.count);
        self.count -= removed;
        removed
    }

    /// Units taken by a half split, rounded up.
    pub fn split_half(&self) -> u32 {
        self.count - self.count / 2
    }
}
