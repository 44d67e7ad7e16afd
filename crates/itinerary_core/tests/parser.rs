use itinerary_core::{
    parse, parse_with, to_day_blocks, NonNumericDayPolicy, ParseOptions, SequentialIdGenerator,
    UNNUMBERED_DAY,
};
use std::collections::HashSet;

const SAMPLE: &str = "**Day 1: Arrival**
Check in to hotel
---
Explore old town
**Day 2: Museums**
Visit art museum
";

fn texts(itinerary: &itinerary_core::Itinerary, day: usize) -> Vec<&str> {
    itinerary.days()[day]
        .activities
        .iter()
        .map(|activity| activity.text.as_str())
        .collect()
}

#[test]
fn text_without_headers_yields_empty_itinerary() {
    assert!(parse("").is_empty());
    assert!(parse("Check in\nExplore\n---\n").is_empty());
    assert!(parse("Day 1: Arrival\n* Day 2: Museums *").is_empty());
}

#[test]
fn single_day_with_separator() {
    let itinerary = parse("**Day 1: Arrival**\nCheck in\n---\nExplore");

    assert_eq!(itinerary.len(), 1);
    let day = &itinerary.days()[0];
    assert_eq!(day.day_number, 1);
    assert_eq!(day.title, "Arrival");
    assert_eq!(texts(&itinerary, 0), vec!["Check in", "Explore"]);
}

#[test]
fn multiple_days_keep_document_order() {
    let itinerary = parse(SAMPLE);

    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.days()[0].title, "Arrival");
    assert_eq!(itinerary.days()[1].title, "Museums");
    assert_eq!(texts(&itinerary, 0), vec!["Check in to hotel", "Explore old town"]);
    assert_eq!(texts(&itinerary, 1), vec!["Visit art museum"]);
}

#[test]
fn day_numbers_are_labels_not_order() {
    let itinerary = parse("**Day 3: Late**\n**Day 1: Early**\n**Day 3: Again**");

    let numbers: Vec<i64> = itinerary.days().iter().map(|day| day.day_number).collect();
    assert_eq!(numbers, vec![3, 1, 3]);
}

#[test]
fn body_lines_are_trimmed_and_blank_lines_dropped() {
    let itinerary = parse("**Day 1:   Arrival  **\n\n   Check in   \n\t\n  ---  \n\tExplore\t\n");

    assert_eq!(itinerary.days()[0].title, "Arrival");
    assert_eq!(texts(&itinerary, 0), vec!["Check in", "Explore"]);
}

#[test]
fn header_without_body_yields_day_without_activities() {
    let itinerary = parse("**Day 1: Rest**\n**Day 2: Hike**\nSummit");

    assert!(itinerary.days()[0].activities.is_empty());
    assert_eq!(texts(&itinerary, 1), vec!["Summit"]);
}

#[test]
fn text_before_first_header_is_ignored() {
    let itinerary = parse("Here is your plan:\n\n**Day 1: Arrival**\nCheck in");

    assert_eq!(itinerary.len(), 1);
    assert_eq!(texts(&itinerary, 0), vec!["Check in"]);
}

#[test]
fn windows_line_endings_are_accepted() {
    let itinerary = parse("**Day 1: Arrival**\r\nCheck in\r\n---\r\nExplore\r\n");

    assert_eq!(itinerary.days()[0].title, "Arrival");
    assert_eq!(texts(&itinerary, 0), vec!["Check in", "Explore"]);
}

#[test]
fn non_numeric_day_uses_sentinel_by_default() {
    let itinerary = parse("**Day One: Arrival**\nCheck in\n**Day 2: Museums**");

    assert_eq!(itinerary.len(), 2);
    assert_eq!(itinerary.days()[0].day_number, UNNUMBERED_DAY);
    assert_eq!(itinerary.days()[0].title, "Arrival");
    assert_eq!(texts(&itinerary, 0), vec!["Check in"]);
    assert_eq!(itinerary.days()[1].day_number, 2);
}

#[test]
fn reject_policy_drops_block_and_its_body() {
    let options = ParseOptions {
        non_numeric_day: NonNumericDayPolicy::Reject,
    };
    let mut ids = SequentialIdGenerator::new();
    let itinerary = parse_with(
        "**Day 1: Arrival**\nCheck in\n**Day X: Mystery**\nUnknown\n**Day 2: Museums**\nArt",
        &options,
        &mut ids,
    );

    assert_eq!(itinerary.len(), 2);
    assert_eq!(texts(&itinerary, 0), vec!["Check in"]);
    assert_eq!(itinerary.days()[1].title, "Museums");
    assert_eq!(texts(&itinerary, 1), vec!["Art"]);
}

#[test]
fn repeated_parses_are_content_equal_with_disjoint_ids() {
    let first = parse(SAMPLE);
    let second = parse(SAMPLE);

    assert!(first.same_content(&second));
    assert_ne!(first, second);

    let first_ids: HashSet<_> = first.ids().into_iter().collect();
    let second_ids: HashSet<_> = second.ids().into_iter().collect();
    assert_eq!(first_ids.len(), first.ids().len());
    assert!(first_ids.is_disjoint(&second_ids));
}

#[test]
fn sequential_ids_follow_document_order() {
    let mut ids = SequentialIdGenerator::new();
    let itinerary = parse_with(SAMPLE, &ParseOptions::default(), &mut ids);

    let raw: Vec<u128> = itinerary.ids().iter().map(|id| id.as_u128()).collect();
    assert_eq!(raw, vec![1, 2, 3, 4, 5]);
}

#[test]
fn signed_day_numbers_are_treated_as_non_numeric() {
    let text = "**Day -1: Prologue**\nA\n**Day +5: Coast**\nB\n**Day 3: Hills**\nC";

    let sentinel = parse(text);
    assert_eq!(sentinel.len(), 3);
    assert_eq!(sentinel.days()[0].day_number, UNNUMBERED_DAY);
    assert_eq!(sentinel.days()[1].day_number, UNNUMBERED_DAY);
    assert_eq!(sentinel.days()[2].day_number, 3);
    let spelled = parse("**Day One: Prologue**\nA\n**Day Five: Coast**\nB\n**Day 3: Hills**\nC");
    assert!(sentinel.same_content(&spelled));

    let options = ParseOptions {
        non_numeric_day: NonNumericDayPolicy::Reject,
    };
    let rejected = parse_with(text, &options, &mut SequentialIdGenerator::new());
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected.days()[0].day_number, 3);
    assert_eq!(texts(&rejected, 0), vec!["C"]);
}

#[test]
fn unnumbered_day_survives_export_and_reparse() {
    let itinerary = parse("**Day Two: Beach**\nSwim\n**Day 4: Town**\nMarket");
    let exported = to_day_blocks(&itinerary);

    let reparsed = parse(&exported);
    assert!(itinerary.same_content(&reparsed));
    assert_eq!(reparsed.days()[0].day_number, UNNUMBERED_DAY);

    let options = ParseOptions {
        non_numeric_day: NonNumericDayPolicy::Reject,
    };
    let strict = parse_with(&exported, &options, &mut SequentialIdGenerator::new());
    assert_eq!(strict.len(), 1);
    assert_eq!(strict.days()[0].title, "Town");
}
