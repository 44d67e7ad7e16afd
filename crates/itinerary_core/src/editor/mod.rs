//! Ordered-hierarchy editor.
//!
//! # Responsibility
//! - Apply select/edit/commit/delete/add/move commands to an itinerary.
//! - Keep the single editing target consistent with the tree it points into.
//!
//! # Invariants
//! - State is an explicit value passed in and returned by each command; the
//!   editor holds no ambient state of its own.
//! - No command fails; invalid input leaves the tree unchanged.
//!
//! # State machine
//! `Idle --select--> Editing --commit|delete--> Idle`. `select` while editing
//! switches target and drops the old draft. `update_draft` is ignored while
//! idle.

pub mod commands;
pub mod reorder;
pub mod state;

pub use commands::{
    add_activity, apply, commit, delete, move_element, select, update_draft, Command,
    SequenceKind,
};
pub use state::{EditState, EditingTarget};
