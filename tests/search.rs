//! End to end runs over the original study configurations: the ascending
//! Martino pattern around the second position and the descending one around
//! the ninth.

use oktavistika::candidates::{step_candidates, StringFret};
use oktavistika::config::{parse_target, Direction, SearchConfig};
use oktavistika::fretboard::{map_area, FretRange};
use oktavistika::instrument::Instrument;
use oktavistika::patterns::{combination_count, find_pattern, SearchResult};
use oktavistika::plot::step_label;
use oktavistika::run_search;

const MARTINO_ASCEND: &str = "5,2 3,5 5,4 2,3 2,4 4,2 4,3 1,2 1,3 6,4 6,5 3,3 3,4";
const MARTINO_DESCEND: &str = "1,12 6,11 4,12 1,9 2,13 4,9 2,11 5,12 5,11 3,12 1,14 3,10 3,9";

fn spot(string: usize, fret: i32) -> StringFret {
    StringFret::new(string, fret)
}

fn ascend_config() -> SearchConfig {
    SearchConfig::new(
        Instrument::standard_guitar(),
        FretRange::new(2, 5),
        Direction::Ascend,
        11,
        parse_target(MARTINO_ASCEND).unwrap(),
    )
    .unwrap()
}

#[test]
fn finds_the_ascending_martino_pattern() {
    let config = ascend_config();
    let area = map_area(&config.instrument, config.range);
    let combos = step_candidates(config.start_note, config.direction, &area);

    // only the G and A strings carry a B between frets 2 and 5
    assert_eq!(combos[0], vec![spot(3, 4), spot(5, 2)]);
    assert_eq!(combination_count(&combos).to_string(), "3456");

    match find_pattern(&combos, &config.target) {
        SearchResult::Found { index, pattern } => {
            assert_eq!(index, 2278);
            assert_eq!(pattern, config.target);
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn finds_the_descending_martino_pattern() {
    let config = SearchConfig::new(
        Instrument::standard_guitar(),
        FretRange::new(9, 14),
        Direction::Descend,
        4,
        parse_target(MARTINO_DESCEND).unwrap(),
    )
    .unwrap();

    let area = map_area(&config.instrument, config.range);
    let combos = step_candidates(config.start_note, config.direction, &area);
    assert_eq!(combination_count(&combos).to_string(), "1492992");

    match find_pattern(&combos, &config.target) {
        SearchResult::Found { index, pattern } => {
            assert_eq!(index, 292805);
            assert_eq!(pattern, config.target);
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn repeated_runs_land_on_the_same_index() {
    let config = ascend_config();
    let first = run_search(&config);
    let second = run_search(&config);
    assert_eq!(first, second);
    assert!(matches!(first, SearchResult::Found { index: 2278, .. }));
}

#[test]
fn octave_can_close_on_the_starting_spot() {
    // same area as the ascending run, but the 13th note is fingered on the
    // very spot the pattern started from
    let closing = "5,2 3,5 5,4 2,3 2,4 4,2 4,3 1,2 1,3 6,4 6,5 3,3 5,2";
    let config = SearchConfig::new(
        Instrument::standard_guitar(),
        FretRange::new(2, 5),
        Direction::Ascend,
        11,
        parse_target(closing).unwrap(),
    )
    .unwrap();

    match run_search(&config) {
        SearchResult::Found { index, pattern } => {
            assert_eq!(index, 2279);
            assert_eq!(pattern[0], pattern[12]);
            assert_eq!(step_label(12, &pattern), "1, 13");
            assert_eq!(step_label(0, &pattern), "1");
        }
        other => panic!("expected a match, got {other:?}"),
    }
}

#[test]
fn too_small_an_area_reports_no_patterns() {
    // a single fret covers at most six notes, most steps have no spot
    let config = SearchConfig::new(
        Instrument::standard_guitar(),
        FretRange::new(3, 3),
        Direction::Ascend,
        7,
        parse_target(MARTINO_ASCEND).unwrap(),
    )
    .unwrap();

    let area = map_area(&config.instrument, config.range);
    let combos = step_candidates(config.start_note, config.direction, &area);
    assert_eq!(combination_count(&combos).to_string(), "0");

    // step 0 wants a G, fret 3 of the low E string has one; step 1 wants a
    // G# and no string sounds it here
    match run_search(&config) {
        SearchResult::NoPatterns { step } => assert_eq!(step, 1),
        other => panic!("expected NoPatterns, got {other:?}"),
    }
}

#[test]
fn absent_target_reports_not_found() {
    // a playable-looking pattern that never comes up: it starts on a spot
    // that does not sound the starting note
    let wrong = "1,2 3,5 5,4 2,3 2,4 4,2 4,3 1,2 1,3 6,4 6,5 3,3 3,4";
    let config = SearchConfig::new(
        Instrument::standard_guitar(),
        FretRange::new(2, 5),
        Direction::Ascend,
        11,
        parse_target(wrong).unwrap(),
    )
    .unwrap();

    assert_eq!(run_search(&config), SearchResult::NotFound);
}
