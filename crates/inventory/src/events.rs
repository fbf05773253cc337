use std::collections::VecDeque;

/// Refresh requests raised by inventory mutations, drained by the UI
/// binding layer. Carries no payload beyond the slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryEvent {
    /// Refresh everything; raised once per bulk mutation.
    Changed,
    /// Refresh a single slot.
    SlotChanged(usize),
}

/// FIFO queue of pending refresh requests.
///
/// A plain message queue keeps the core decoupled from any UI framework;
/// gestures are processed synchronously, so no locking is needed.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<InventoryEvent>,
}

impl EventQueue {
    /// Enqueue a refresh request.
    pub fn push(&mut self, event: InventoryEvent) {
        self.queue.push_back(event);
    }

    /// Drain all pending requests in delivery order.
    pub fn drain(&mut self) -> impl Iterator<Item = InventoryEvent> + '_ {
        self.queue.drain(..)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_order() {
        let mut queue = EventQueue::default();
        queue.push(InventoryEvent::SlotChanged(3));
        queue.push(InventoryEvent::Changed);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![InventoryEvent::SlotChanged(3), InventoryEvent::Changed]
        );
        assert!(queue.is_empty());
    }
}
