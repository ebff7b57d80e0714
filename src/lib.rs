pub mod audio;
pub mod candidates;
pub mod cli;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod instrument;
pub mod patterns;
pub mod plot;

pub use candidates::{step_candidates, StringFret, SCALE_STEPS};
pub use config::{Direction, SearchConfig};
pub use error::PatternError;
pub use fretboard::{map_area, FretRange, FretboardArea};
pub use instrument::Instrument;
pub use patterns::{combination_count, find_pattern, Patterns, SearchResult};

/// Run one whole search: map the area of activity, collect the candidate
/// spots for all 13 steps and walk the enumeration looking for the target.
pub fn run_search(config: &SearchConfig) -> SearchResult {
    let area = map_area(&config.instrument, config.range);
    let combos = step_candidates(config.start_note, config.direction, &area);
    find_pattern(&combos, &config.target)
}
