//! Itinerary domain model.
//!
//! # Responsibility
//! - Define the day/activity tree shared by parser, editor and renderers.
//! - Own identifier generation for every node in that tree.
//!
//! # Invariants
//! - Every day and activity carries an id that is unique across the tree.
//! - Sequence position is the only ordering truth; `day_number` is a label.
//! - Ids survive edits and reorders; only deletion retires an id.

pub mod ids;
pub mod itinerary;
