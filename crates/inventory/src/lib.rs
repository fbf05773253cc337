//! Slot-based inventory with a cursor gesture state machine.
//!
//! The [`Inventory`] owns a fixed number of slots and enforces
//! catalog-driven stack limits on bulk add/remove. The
//! [`CursorController`] mediates all slot gestures (pickup, place, merge,
//! split, drag distribution, double-click gather) while keeping item
//! totals conserved.

mod cursor;
mod drag;
mod events;
mod inventory;
mod stack;

pub use cursor::{CursorController, DOUBLE_CLICK_WINDOW_MS};
pub use drag::even_shares;
pub use events::{EventQueue, InventoryEvent};
pub use inventory::Inventory;
pub use stack::ItemStack;
