//! Static per-item metadata.

use serde::{Deserialize, Serialize};

/// Item identifier referencing the item catalog.
pub type ItemId = u16;

/// Stack size used when a definition does not specify one.
pub const DEFAULT_MAX_STACK: u32 = 64;

/// Static item definition loaded from an item pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    /// Human-readable identifier (e.g., "coffee_bean").
    pub name: String,
    /// Optional grouping label for UI tabs (e.g., "ingredients").
    #[serde(default)]
    pub group: Option<String>,
    /// Whether multiple units share a slot.
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    /// Maximum units per stack. Ignored when `stackable` is false.
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
}

fn default_stackable() -> bool {
    true
}

fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

impl ItemDef {
    /// Build a stackable definition with an explicit stack limit.
    pub fn stackable(name: &str, max_stack: u32) -> Self {
        Self {
            name: name.to_string(),
            group: None,
            stackable: true,
            max_stack,
        }
    }

    /// Build a definition for an item that never stacks.
    pub fn unstackable(name: &str) -> Self {
        Self {
            name: name.to_string(),
            group: None,
            stackable: false,
            max_stack: 1,
        }
    }

    /// Effective per-slot capacity: non-stackable items hold exactly one
    /// unit, and a declared limit of zero is treated as one.
    pub fn stack_limit(&self) -> u32 {
        if self.stackable {
            self.max_stack.max(1)
        } else {
            1
        }
    }
}
