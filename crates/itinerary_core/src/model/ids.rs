//! Identifier generation for itinerary nodes.
//!
//! # Responsibility
//! - Produce opaque ids for days and activities.
//! - Keep the id source swappable so tests can use deterministic ids.
//!
//! # Invariants
//! - A generator never yields the nil uuid.
//! - A generator never yields the same id twice during its lifetime.

use uuid::Uuid;

/// Stable identifier of one day in an itinerary.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DayId = Uuid;

/// Stable identifier of one activity in an itinerary.
pub type ActivityId = Uuid;

/// Source of fresh node ids.
pub trait IdGenerator {
    /// Returns an id that this generator has never returned before.
    fn next_id(&mut self) -> Uuid;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> Uuid {
        (**self).next_id()
    }
}

/// Random v4 uuid generator used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic counter-backed generator.
///
/// Ids are `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ... so output that
/// includes ids is reproducible across runs.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u128,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}
