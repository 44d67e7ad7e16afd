//! Position-only reordering inside one sequence.
//!
//! # Invariants
//! - Elements are never created, dropped or altered; only positions change.
//! - Out-of-range indices are a no-op, never clamped.

/// Removes the element at `from` and reinserts it at `to`.
///
/// Returns `true` when the sequence changed. `from == to` and any index
/// outside `0..items.len()` leave `items` untouched.
pub fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Where an element that sat at `position` ends up after
/// `move_within(items, from, to)` succeeded.
pub fn moved_position(position: usize, from: usize, to: usize) -> usize {
    if position == from {
        to
    } else if from < to && position > from && position <= to {
        position - 1
    } else if to < from && position >= to && position < from {
        position + 1
    } else {
        position
    }
}
