//! Editor commands as `(itinerary, state, input) -> (itinerary, state)`.
//!
//! # Invariants
//! - Every command is total: bad indices, blank text and stale targets are
//!   absorbed as no-ops.
//! - The returned state never references a missing (day, activity) pair.
//! - Ids are only minted by `add_activity`; nothing else touches identity.

use crate::editor::reorder::{move_within, moved_position};
use crate::editor::state::{EditState, EditingTarget};
use crate::model::ids::{DayId, IdGenerator};
use crate::model::itinerary::{Activity, Itinerary};
use log::debug;

/// Which ordered sequence a `move` reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Days within the itinerary; the container id is ignored.
    Days,
    /// Activities within the day named by the container id.
    Activities,
}

/// One UI-driven editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select {
        day_position: usize,
        activity_position: usize,
    },
    UpdateDraft {
        text: String,
    },
    Commit,
    Delete,
    AddActivity {
        day_position: usize,
        text: String,
    },
    /// Drag-and-drop release. `to_index: None` means there was no drop target.
    Move {
        kind: SequenceKind,
        container: Option<DayId>,
        from_index: usize,
        to_index: Option<usize>,
    },
}

/// Applies one command.
pub fn apply<G: IdGenerator + ?Sized>(
    itinerary: Itinerary,
    state: EditState,
    command: Command,
    ids: &mut G,
) -> (Itinerary, EditState) {
    match command {
        Command::Select {
            day_position,
            activity_position,
        } => select(itinerary, state, day_position, activity_position),
        Command::UpdateDraft { text } => update_draft(itinerary, state, text),
        Command::Commit => commit(itinerary, state),
        Command::Delete => delete(itinerary, state),
        Command::AddActivity { day_position, text } => {
            add_activity(itinerary, state, ids, day_position, &text)
        }
        Command::Move {
            kind,
            container,
            from_index,
            to_index,
        } => move_element(itinerary, state, kind, container, from_index, to_index),
    }
}

/// Opens the activity at the given positions for editing.
///
/// The draft starts as the activity's current text. Any previous draft is
/// discarded without being written back. Unknown positions are a no-op.
pub fn select(
    itinerary: Itinerary,
    state: EditState,
    day_position: usize,
    activity_position: usize,
) -> (Itinerary, EditState) {
    let Some(activity) = itinerary.activity(day_position, activity_position) else {
        debug!("event=command_ignored module=editor command=select reason=out_of_range");
        return (itinerary, state);
    };

    if state.has_unsaved_draft(&itinerary) {
        debug!("event=draft_discarded module=editor command=select");
    }

    let next = EditState::Editing(EditingTarget {
        day_position,
        activity_position,
        draft: activity.text.clone(),
    });
    (itinerary, next)
}

/// Replaces the draft verbatim. Only meaningful while editing.
pub fn update_draft(
    itinerary: Itinerary,
    state: EditState,
    text: String,
) -> (Itinerary, EditState) {
    match state {
        EditState::Idle => (itinerary, EditState::Idle),
        EditState::Editing(target) => (
            itinerary,
            EditState::Editing(EditingTarget {
                draft: text,
                ..target
            }),
        ),
    }
}

/// Writes the draft into the targeted activity and returns to `Idle`.
///
/// The activity keeps its id. The draft is stored as-is, without trimming.
pub fn commit(mut itinerary: Itinerary, state: EditState) -> (Itinerary, EditState) {
    let EditState::Editing(target) = state else {
        return (itinerary, EditState::Idle);
    };

    match itinerary
        .day_mut(target.day_position)
        .and_then(|day| day.activities.get_mut(target.activity_position))
    {
        Some(activity) => activity.text = target.draft,
        None => debug!("event=command_ignored module=editor command=commit reason=stale_target"),
    }
    (itinerary, EditState::Idle)
}

/// Removes the targeted activity and returns to `Idle`.
///
/// A stale target only clears the state.
pub fn delete(mut itinerary: Itinerary, state: EditState) -> (Itinerary, EditState) {
    let EditState::Editing(target) = state else {
        return (itinerary, EditState::Idle);
    };

    match itinerary.day_mut(target.day_position) {
        Some(day) if target.activity_position < day.activities.len() => {
            day.activities.remove(target.activity_position);
        }
        _ => debug!("event=command_ignored module=editor command=delete reason=stale_target"),
    }
    (itinerary, EditState::Idle)
}

/// Appends a new activity with trimmed `text` to the day at `day_position`.
///
/// Blank text or an unknown day is a no-op. Appending never shifts existing
/// positions, so the editing target is left alone.
pub fn add_activity<G: IdGenerator + ?Sized>(
    mut itinerary: Itinerary,
    state: EditState,
    ids: &mut G,
    day_position: usize,
    text: &str,
) -> (Itinerary, EditState) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        debug!("event=command_ignored module=editor command=add_activity reason=blank_text");
        return (itinerary, state);
    }

    match itinerary.day_mut(day_position) {
        Some(day) => day.activities.push(Activity::new(ids.next_id(), trimmed)),
        None => {
            debug!("event=command_ignored module=editor command=add_activity reason=unknown_day")
        }
    }
    (itinerary, state)
}

/// Reorders one sequence.
///
/// A missing drop target, an unknown container or out-of-range indices are a
/// no-op. When the moved sequence holds the editing target, the target is
/// re-pointed at the same activity and keeps its draft.
pub fn move_element(
    mut itinerary: Itinerary,
    state: EditState,
    kind: SequenceKind,
    container: Option<DayId>,
    from_index: usize,
    to_index: Option<usize>,
) -> (Itinerary, EditState) {
    let Some(to_index) = to_index else {
        debug!("event=command_ignored module=editor command=move reason=no_drop_target");
        return (itinerary, state);
    };

    match kind {
        SequenceKind::Days => {
            if !move_within(itinerary.days_mut(), from_index, to_index) {
                return (itinerary, state);
            }
            let state = match state {
                EditState::Editing(target) => EditState::Editing(EditingTarget {
                    day_position: moved_position(target.day_position, from_index, to_index),
                    ..target
                }),
                idle => idle,
            };
            (itinerary, state)
        }
        SequenceKind::Activities => {
            let Some(day_position) = container.and_then(|id| itinerary.day_position(id)) else {
                debug!("event=command_ignored module=editor command=move reason=unknown_container");
                return (itinerary, state);
            };
            let moved = itinerary
                .day_mut(day_position)
                .is_some_and(|day| move_within(&mut day.activities, from_index, to_index));
            if !moved {
                return (itinerary, state);
            }
            let state = match state {
                EditState::Editing(target) if target.day_position == day_position => {
                    EditState::Editing(EditingTarget {
                        activity_position: moved_position(
                            target.activity_position,
                            from_index,
                            to_index,
                        ),
                        ..target
                    })
                }
                other => other,
            };
            (itinerary, state)
        }
    }
}
