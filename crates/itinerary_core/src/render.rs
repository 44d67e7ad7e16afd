//! Day-block text export.
//!
//! Writes an itinerary back in the grammar the parser reads, one activity per
//! line. Days are separated by a blank line, which the parser ignores.

use crate::model::itinerary::Itinerary;
use std::fmt::Write;

/// Renders `itinerary` as day-block text.
///
/// Activity text is written verbatim, so an edited activity containing line
/// breaks comes back as several activities when re-parsed.
pub fn to_day_blocks(itinerary: &Itinerary) -> String {
    let mut out = String::new();
    for (index, day) in itinerary.days().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "**Day {}: {}**", day.day_number, day.title);
        for activity in &day.activities {
            out.push_str(&activity.text);
            out.push('\n');
        }
    }
    out
}
