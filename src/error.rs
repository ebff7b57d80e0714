use num::BigUint;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Fret range is reversed: {start} > {stop}")]
    ReversedFretRange { start: i32, stop: i32 },

    #[error("Instrument has no strings")]
    NoStrings,

    #[error("Starting note {0} is not in 0..=11")]
    BadStartNote(i32),

    #[error("Unknown direction '{0}', expected ascend or descend")]
    BadDirection(String),

    #[error("Can't parse pattern entry '{0}', expected string,fret")]
    BadTarget(String),

    #[error("Target pattern has {0} notes, a chromatic pattern has 13")]
    BadTargetLength(usize),

    #[error("There are {total} patterns, refusing to collect more than {cap}")]
    TooManyPatterns { total: BigUint, cap: usize },
}
