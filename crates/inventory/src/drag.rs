//! Even distribution of a held quantity across drag-visited slots.

/// Split `quantity` into even shares for `visited` slots plus one share
/// that stays in hand.
///
/// With `k` visited slots the quantity is divided over `k + 1` shares:
/// `base = q / (k + 1)` per slot, and the `q % (k + 1)` remainder units go
/// one each to the earliest-visited slots. The returned vector has one
/// entry per visited slot, in visit order; the hand keeps
/// `quantity - sum(shares)`.
pub fn even_shares(quantity: u32, visited: usize) -> Vec<u32> {
    let parts = visited as u32 + 1;
    let base = quantity / parts;
    let remainder = quantity % parts;
    (0..visited as u32)
        .map(|position| base + u32::from(position < remainder))
        .collect()
}
