//! Day header line matcher.

use once_cell::sync::Lazy;
use regex::Regex;

// `**Day <N>: <Title>**` on a whole (already trimmed) line. `<N>` stops at the
// first colon so titles may contain colons of their own.
static DAY_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*Day\s+([^:]*?)\s*:\s*(.*?)\s*\*\*$").expect("valid day header regex")
});

/// Captures of one header line, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHeader<'a> {
    /// Raw `<N>` capture; not guaranteed to be numeric.
    pub number: &'a str,
    /// Trimmed `<Title>` capture.
    pub title: &'a str,
}

impl DayHeader<'_> {
    /// Parses the number capture; `None` unless it is a plain run of ASCII
    /// digits that fits in an `i64`. Signs are rejected, so negative day
    /// numbers never come from input.
    pub fn day_number(&self) -> Option<i64> {
        if self.number.is_empty() || !self.number.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.number.parse().ok()
    }
}

/// Returns header captures when `line` is a day header.
pub fn match_header(line: &str) -> Option<DayHeader<'_>> {
    let captures = DAY_HEADER_RE.captures(line.trim())?;
    let number = captures.get(1)?.as_str().trim();
    let title = captures.get(2)?.as_str().trim();
    Some(DayHeader { number, title })
}

#[cfg(test)]
mod tests {
    use super::match_header;

    #[test]
    fn matches_canonical_header() {
        let header = match_header("**Day 1: Arrival**").expect("header should match");
        assert_eq!(header.number, "1");
        assert_eq!(header.title, "Arrival");
        assert_eq!(header.day_number(), Some(1));
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_colons_in_title() {
        let header = match_header("   **Day 12:  Rome: Forum & Colosseum **  ")
            .expect("header should match");
        assert_eq!(header.number, "12");
        assert_eq!(header.title, "Rome: Forum & Colosseum");
    }

    #[test]
    fn captures_non_numeric_day_label() {
        let header = match_header("**Day Two: Beach**").expect("header should match");
        assert_eq!(header.number, "Two");
        assert_eq!(header.day_number(), None);
    }

    #[test]
    fn overflowing_number_is_not_numeric() {
        let header =
            match_header("**Day 99999999999999999999: Far**").expect("header should match");
        assert_eq!(header.day_number(), None);
    }

    #[test]
    fn signed_numbers_are_not_numeric() {
        let negative = match_header("**Day -1: Prologue**").expect("header should match");
        assert_eq!(negative.number, "-1");
        assert_eq!(negative.day_number(), None);

        let positive = match_header("**Day +5: Coast**").expect("header should match");
        assert_eq!(positive.day_number(), None);

        let padded = match_header("**Day 007: Spies**").expect("header should match");
        assert_eq!(padded.day_number(), Some(7));
    }

    #[test]
    fn allows_empty_title() {
        let header = match_header("**Day 3: **").expect("header should match");
        assert_eq!(header.title, "");
    }

    #[test]
    fn rejects_lines_that_are_not_whole_headers() {
        assert!(match_header("Day 1: Arrival").is_none());
        assert!(match_header("**Day 1 Arrival**").is_none());
        assert!(match_header("**Day 1: Arrival** and more").is_none());
        assert!(match_header("See **Day 1: Arrival**").is_none());
        assert!(match_header("**day 1: Arrival**").is_none());
        assert!(match_header("").is_none());
    }
}
