//! Day/activity tree.
//!
//! # Responsibility
//! - Hold the ordered days of one itinerary and their ordered activities.
//! - Offer read access for renderers and position/id lookups for the editor.
//!
//! # Invariants
//! - The only public way to obtain a non-empty `Itinerary` is the parser;
//!   mutation is restricted to the editor inside this crate.
//! - `day_number` is display data and may repeat or skip values.

use crate::model::ids::{ActivityId, DayId};
use serde::Serialize;
use uuid::Uuid;

/// One line item under a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    /// Stable id, usable as a rendering key.
    pub id: ActivityId,
    /// Display text. Trimmed when created; stored verbatim after an edit.
    pub text: String,
}

impl Activity {
    pub(crate) fn new(id: ActivityId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// One day block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    /// Stable id, usable as a rendering key and as a move container id.
    pub id: DayId,
    /// Label captured from the `**Day <N>: ...**` header.
    pub day_number: i64,
    /// Trimmed header title.
    pub title: String,
    /// Activities in display order.
    pub activities: Vec<Activity>,
}

impl Day {
    pub(crate) fn new(
        id: DayId,
        day_number: i64,
        title: impl Into<String>,
        activities: Vec<Activity>,
    ) -> Self {
        Self {
            id,
            day_number,
            title: title.into(),
            activities,
        }
    }

    /// Returns the position of the activity with `id`, if present.
    pub fn activity_position(&self, id: ActivityId) -> Option<usize> {
        self.activities.iter().position(|activity| activity.id == id)
    }
}

/// Ordered sequence of days.
///
/// Serialized as a plain JSON array of days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Itinerary {
    days: Vec<Day>,
}

impl Itinerary {
    /// Creates an itinerary with no days.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_days(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, position: usize) -> Option<&Day> {
        self.days.get(position)
    }

    /// Returns the position of the day with `id`, if present.
    pub fn day_position(&self, id: DayId) -> Option<usize> {
        self.days.iter().position(|day| day.id == id)
    }

    pub fn activity(&self, day_position: usize, activity_position: usize) -> Option<&Activity> {
        self.days
            .get(day_position)
            .and_then(|day| day.activities.get(activity_position))
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of activities across all days.
    pub fn activity_count(&self) -> usize {
        self.days.iter().map(|day| day.activities.len()).sum()
    }

    /// Returns every node id in tree order: each day followed by its
    /// activities.
    pub fn ids(&self) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(self.days.len() + self.activity_count());
        for day in &self.days {
            ids.push(day.id);
            ids.extend(day.activities.iter().map(|activity| activity.id));
        }
        ids
    }

    /// Compares structure and text while ignoring ids.
    pub fn same_content(&self, other: &Itinerary) -> bool {
        self.days.len() == other.days.len()
            && self.days.iter().zip(&other.days).all(|(left, right)| {
                left.day_number == right.day_number
                    && left.title == right.title
                    && left.activities.len() == right.activities.len()
                    && left
                        .activities
                        .iter()
                        .zip(&right.activities)
                        .all(|(a, b)| a.text == b.text)
            })
    }

    pub(crate) fn days_mut(&mut self) -> &mut Vec<Day> {
        &mut self.days
    }

    pub(crate) fn day_mut(&mut self, position: usize) -> Option<&mut Day> {
        self.days.get_mut(position)
    }
}
