//! Itinerary editing session use-case service.
//!
//! # Responsibility
//! - Own the current itinerary, editing state, pending inputs and id source.
//! - Replace the itinerary wholesale whenever new raw text arrives.
//! - Give the rendering layer one place to read state and issue commands.
//!
//! # Invariants
//! - A load discards the previous tree, editing target and pending inputs.
//! - A failed transport result leaves every part of the session unchanged.
//! - One id generator serves both parsing and adds, so ids never repeat
//!   within a session.

use crate::editor::commands::{self, Command, SequenceKind};
use crate::editor::state::{EditState, EditingTarget};
use crate::model::ids::{DayId, IdGenerator, RandomIdGenerator};
use crate::model::itinerary::Itinerary;
use crate::parser::{parse_with, ParseOptions};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts reported after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub days: usize,
    pub activities: usize,
}

/// Read model handed to renderers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<'a> {
    pub itinerary: &'a Itinerary,
    /// `None` while idle.
    pub editing: Option<&'a EditingTarget>,
}

/// Single-user, single-threaded editing session.
pub struct ItinerarySession<G: IdGenerator = RandomIdGenerator> {
    itinerary: Itinerary,
    state: EditState,
    pending: BTreeMap<DayId, String>,
    ids: G,
    options: ParseOptions,
}

impl ItinerarySession<RandomIdGenerator> {
    /// Creates an empty session with random ids and default parse options.
    pub fn new() -> Self {
        Self::with_generator(RandomIdGenerator, ParseOptions::default())
    }
}

impl Default for ItinerarySession<RandomIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> ItinerarySession<G> {
    /// Creates an empty session with a caller-chosen id source.
    pub fn with_generator(ids: G, options: ParseOptions) -> Self {
        Self {
            itinerary: Itinerary::empty(),
            state: EditState::Idle,
            pending: BTreeMap::new(),
            ids,
            options,
        }
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn edit_state(&self) -> &EditState {
        &self.state
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Returns a serializable view of the tree and the editing target.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            itinerary: &self.itinerary,
            editing: self.state.target(),
        }
    }

    /// Returns whether a `select` now would discard edited text.
    pub fn has_unsaved_draft(&self) -> bool {
        self.state.has_unsaved_draft(&self.itinerary)
    }

    /// Parses `text` and replaces the whole session content with the result.
    pub fn load_text(&mut self, text: &str) -> LoadSummary {
        self.itinerary = parse_with(text, &self.options, &mut self.ids);
        self.state = EditState::Idle;
        self.pending.clear();

        let summary = LoadSummary {
            days: self.itinerary.len(),
            activities: self.itinerary.activity_count(),
        };
        info!(
            "event=itinerary_loaded module=session status=ok days={} activities={}",
            summary.days, summary.activities
        );
        summary
    }

    /// Accepts the outcome of a transport request.
    ///
    /// `Ok` text is loaded like [`Self::load_text`]. `Err` is handed back
    /// untouched and the current session content stays as it was.
    pub fn receive<E>(&mut self, result: Result<String, E>) -> Result<LoadSummary, E> {
        match result {
            Ok(text) => Ok(self.load_text(&text)),
            Err(err) => {
                warn!("event=itinerary_load_failed module=session status=error");
                Err(err)
            }
        }
    }

    /// Applies one editor command.
    pub fn apply(&mut self, command: Command) {
        let add_target = match &command {
            Command::AddActivity { day_position, .. } => self
                .itinerary
                .day(*day_position)
                .map(|day| (day.id, day.activities.len())),
            _ => None,
        };

        let itinerary = std::mem::take(&mut self.itinerary);
        let state = std::mem::take(&mut self.state);
        let (itinerary, state) = commands::apply(itinerary, state, command, &mut self.ids);
        self.itinerary = itinerary;
        self.state = state;

        if let Some((day_id, before)) = add_target {
            let grew = self
                .itinerary
                .day_position(day_id)
                .and_then(|position| self.itinerary.day(position))
                .is_some_and(|day| day.activities.len() > before);
            if grew {
                self.pending.remove(&day_id);
            }
        }

        debug_assert!(self.state.is_consistent_with(&self.itinerary));
    }

    pub fn select(&mut self, day_position: usize, activity_position: usize) {
        self.apply(Command::Select {
            day_position,
            activity_position,
        });
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.apply(Command::UpdateDraft { text: text.into() });
    }

    pub fn commit(&mut self) {
        self.apply(Command::Commit);
    }

    pub fn delete(&mut self) {
        self.apply(Command::Delete);
    }

    pub fn add_activity(&mut self, day_position: usize, text: impl Into<String>) {
        self.apply(Command::AddActivity {
            day_position,
            text: text.into(),
        });
    }

    /// Reorders days.
    pub fn move_day(&mut self, from_index: usize, to_index: usize) {
        self.apply(Command::Move {
            kind: SequenceKind::Days,
            container: None,
            from_index,
            to_index: Some(to_index),
        });
    }

    /// Reorders activities inside the day with `day_id`.
    pub fn move_activity(&mut self, day_id: DayId, from_index: usize, to_index: usize) {
        self.apply(Command::Move {
            kind: SequenceKind::Activities,
            container: Some(day_id),
            from_index,
            to_index: Some(to_index),
        });
    }

    /// Returns the pending new-activity text for a day, empty when unset.
    pub fn pending_input(&self, day_id: DayId) -> &str {
        self.pending.get(&day_id).map(String::as_str).unwrap_or("")
    }

    /// Stores the pending new-activity text for the day at `day_position`.
    ///
    /// Unknown positions are ignored.
    pub fn set_pending_input(&mut self, day_position: usize, text: impl Into<String>) {
        match self.itinerary.day(day_position) {
            Some(day) => {
                self.pending.insert(day.id, text.into());
            }
            None => debug!(
                "event=command_ignored module=session command=set_pending_input reason=unknown_day"
            ),
        }
    }

    /// Adds the day's pending text as a new activity.
    ///
    /// The buffer is cleared only when an activity was actually added, so
    /// blank input stays in place for the user to keep typing.
    pub fn submit_pending_input(&mut self, day_position: usize) {
        let Some(day) = self.itinerary.day(day_position) else {
            return;
        };
        let text = self.pending.get(&day.id).cloned().unwrap_or_default();
        self.add_activity(day_position, text);
    }
}
