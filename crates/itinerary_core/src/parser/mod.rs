//! Raw day-block text to itinerary tree.
//!
//! # Responsibility
//! - Scan raw itinerary text line by line and build the day/activity tree.
//! - Stamp every new node with a fresh id from the caller's generator.
//!
//! # Invariants
//! - Parsing never fails; malformed input degrades to a partial or empty tree.
//! - Output order follows document order for both days and activities.
//! - The parser does not read or write editor state.
//!
//! # Grammar
//! A day block is a `**Day <N>: <Title>**` header line followed by body lines
//! up to the next header or end of input. Body lines are trimmed; blank lines
//! and `---` separators are dropped. Text before the first header is ignored.

pub mod header;

use crate::model::ids::{IdGenerator, RandomIdGenerator};
use crate::model::itinerary::{Activity, Day, Itinerary};
use header::match_header;
use log::{debug, warn};

/// Body line that separates groups of activities; never becomes an activity.
pub const SEPARATOR_LINE: &str = "---";

/// `day_number` stored for headers whose `<N>` is not an integer, under
/// [`NonNumericDayPolicy::Sentinel`].
pub const UNNUMBERED_DAY: i64 = -1;

/// What to do with a header whose `<N>` capture is not an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NonNumericDayPolicy {
    /// Keep the block and store [`UNNUMBERED_DAY`] as its day number.
    #[default]
    Sentinel,
    /// Drop the block, including its body lines.
    Reject,
}

/// Parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub non_numeric_day: NonNumericDayPolicy,
}

/// Parses `text` with default options and random ids.
pub fn parse(text: &str) -> Itinerary {
    parse_with(text, &ParseOptions::default(), &mut RandomIdGenerator)
}

/// Parses `text` with explicit options and id source.
///
/// Ids are drawn in document order: each day's id before its activities'.
pub fn parse_with<G: IdGenerator + ?Sized>(
    text: &str,
    options: &ParseOptions,
    ids: &mut G,
) -> Itinerary {
    let mut days = Vec::new();
    let mut block = Block::Preamble;
    let mut ignored_lines = 0usize;
    let mut rejected_blocks = 0usize;

    for (index, line) in text.lines().enumerate() {
        if let Some(header) = match_header(line) {
            if let Block::Open(day) = block {
                days.push(day);
            }

            block = match (header.day_number(), options.non_numeric_day) {
                (Some(day_number), _) => Block::Open(Day::new(
                    ids.next_id(),
                    day_number,
                    header.title,
                    Vec::new(),
                )),
                (None, NonNumericDayPolicy::Sentinel) => {
                    warn!(
                        "event=day_header_unnumbered module=parser status=degraded line={}",
                        index + 1
                    );
                    Block::Open(Day::new(
                        ids.next_id(),
                        UNNUMBERED_DAY,
                        header.title,
                        Vec::new(),
                    ))
                }
                (None, NonNumericDayPolicy::Reject) => {
                    warn!(
                        "event=day_header_rejected module=parser status=degraded line={}",
                        index + 1
                    );
                    rejected_blocks += 1;
                    Block::Rejected
                }
            };
            continue;
        }

        let Some(content) = activity_text(line) else {
            continue;
        };
        match &mut block {
            Block::Open(day) => day.activities.push(Activity::new(ids.next_id(), content)),
            Block::Preamble | Block::Rejected => ignored_lines += 1,
        }
    }

    if let Block::Open(day) = block {
        days.push(day);
    }

    let itinerary = Itinerary::from_days(days);
    debug!(
        "event=itinerary_parse module=parser status=ok days={} activities={} \
         ignored_lines={} rejected_blocks={}",
        itinerary.len(),
        itinerary.activity_count(),
        ignored_lines,
        rejected_blocks
    );
    itinerary
}

/// Block currently receiving body lines.
enum Block {
    /// Before the first header.
    Preamble,
    /// Header was dropped by [`NonNumericDayPolicy::Reject`].
    Rejected,
    Open(Day),
}

fn activity_text(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed == SEPARATOR_LINE {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::activity_text;

    #[test]
    fn activity_text_drops_blank_and_separator_lines() {
        assert_eq!(activity_text("  Check in  "), Some("Check in"));
        assert_eq!(activity_text("   "), None);
        assert_eq!(activity_text(" --- "), None);
        assert_eq!(activity_text("----"), Some("----"));
        assert_eq!(activity_text("--- more"), Some("--- more"));
    }
}
