//! Editing target state machine value.

use crate::model::itinerary::Itinerary;
use serde::Serialize;

/// The single activity currently open for text editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditingTarget {
    pub day_position: usize,
    pub activity_position: usize,
    /// Unsaved text; stored verbatim, never trimmed.
    pub draft: String,
}

/// Editor state threaded through every command.
///
/// `Idle` is both the initial state and the state between edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(EditingTarget),
}

impl EditState {
    pub fn target(&self) -> Option<&EditingTarget> {
        match self {
            Self::Idle => None,
            Self::Editing(target) => Some(target),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Returns whether the target references an existing (day, activity) pair.
    ///
    /// `Idle` is always consistent.
    pub fn is_consistent_with(&self, itinerary: &Itinerary) -> bool {
        match self {
            Self::Idle => true,
            Self::Editing(target) => itinerary
                .activity(target.day_position, target.activity_position)
                .is_some(),
        }
    }

    /// Returns whether the draft differs from the targeted activity's text.
    ///
    /// A UI can use this to confirm before a `select` discards the draft.
    pub fn has_unsaved_draft(&self, itinerary: &Itinerary) -> bool {
        match self {
            Self::Idle => false,
            Self::Editing(target) => itinerary
                .activity(target.day_position, target.activity_position)
                .is_some_and(|activity| activity.text != target.draft),
        }
    }
}
