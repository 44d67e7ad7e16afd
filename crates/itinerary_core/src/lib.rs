//! Core domain logic for the itinerary editor.
//! This crate is the single source of truth for itinerary tree invariants.

pub mod editor;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod service;

pub use editor::{Command, EditState, EditingTarget, SequenceKind};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::ids::{
    ActivityId, DayId, IdGenerator, RandomIdGenerator, SequentialIdGenerator,
};
pub use model::itinerary::{Activity, Day, Itinerary};
pub use parser::{parse, parse_with, NonNumericDayPolicy, ParseOptions, UNNUMBERED_DAY};
pub use render::to_day_blocks;
pub use service::session_service::{ItinerarySession, LoadSummary, SessionSnapshot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
