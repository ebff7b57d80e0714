use std::fmt;

use crate::candidates::{StringFret, SCALE_STEPS};
use crate::cli::Args;
use crate::error::PatternError;
use crate::fretboard::FretRange;
use crate::instrument::Instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascend,
    Descend,
}

impl Direction {
    /// Sign of the note delta from one step to the next.
    pub fn step(&self) -> i32 {
        match self {
            Direction::Ascend => 1,
            Direction::Descend => -1,
        }
    }

    pub fn parse(name: &str) -> Result<Direction, PatternError> {
        match name {
            "ascend" => Ok(Direction::Ascend),
            "descend" => Ok(Direction::Descend),
            _ => Err(PatternError::BadDirection(name.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascend => write!(f, "ascend"),
            Direction::Descend => write!(f, "descend"),
        }
    }
}

/// Everything one search run needs, checked up front. Nothing in here is
/// mutated once the search starts.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub instrument: Instrument,
    pub range: FretRange,
    pub direction: Direction,
    pub start_note: i32,
    pub target: Vec<StringFret>,
}

impl SearchConfig {
    pub fn new(
        instrument: Instrument,
        range: FretRange,
        direction: Direction,
        start_note: i32,
        target: Vec<StringFret>,
    ) -> Result<SearchConfig, PatternError> {
        if instrument.strings.is_empty() {
            return Err(PatternError::NoStrings);
        }
        if range.start > range.stop {
            return Err(PatternError::ReversedFretRange {
                start: range.start,
                stop: range.stop,
            });
        }
        if !(0..12).contains(&start_note) {
            return Err(PatternError::BadStartNote(start_note));
        }
        if target.len() != SCALE_STEPS {
            return Err(PatternError::BadTargetLength(target.len()));
        }

        Ok(SearchConfig {
            instrument,
            range,
            direction,
            start_note,
            target,
        })
    }

    pub fn from_args(args: &Args) -> Result<SearchConfig, PatternError> {
        SearchConfig::new(
            Instrument::standard_guitar(),
            FretRange::new(args.fret_start, args.fret_stop),
            Direction::parse(&args.direction)?,
            args.start_note,
            parse_target(&args.target)?,
        )
    }
}

/// Parse a pattern given as whitespace separated string,fret pairs,
/// e.g. "5,2 3,5 5,4".
pub fn parse_target(text: &str) -> Result<Vec<StringFret>, PatternError> {
    let mut target = Vec::new();
    for pair in text.split_whitespace() {
        let (string, fret) = pair
            .split_once(',')
            .ok_or_else(|| PatternError::BadTarget(pair.to_string()))?;
        let string = string
            .trim()
            .parse::<usize>()
            .map_err(|_| PatternError::BadTarget(pair.to_string()))?;
        let fret = fret
            .trim()
            .parse::<i32>()
            .map_err(|_| PatternError::BadTarget(pair.to_string()))?;
        if string == 0 {
            // string numbers on the instrument start at 1
            return Err(PatternError::BadTarget(pair.to_string()));
        }
        target.push(StringFret::new(string, fret));
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn martino() -> Vec<StringFret> {
        parse_target("5,2 3,5 5,4 2,3 2,4 4,2 4,3 1,2 1,3 6,4 6,5 3,3 3,4").unwrap()
    }

    #[test]
    fn parses_string_fret_pairs() {
        let target = parse_target("5,2 3,5 1,-2").unwrap();
        assert_eq!(
            target,
            vec![
                StringFret::new(5, 2),
                StringFret::new(3, 5),
                StringFret::new(1, -2),
            ]
        );
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!(matches!(
            parse_target("5;2"),
            Err(PatternError::BadTarget(_))
        ));
        assert!(matches!(
            parse_target("x,2"),
            Err(PatternError::BadTarget(_))
        ));
        assert!(matches!(
            parse_target("0,2"),
            Err(PatternError::BadTarget(_))
        ));
    }

    #[test]
    fn direction_parse_is_strict() {
        assert_eq!(Direction::parse("ascend").unwrap(), Direction::Ascend);
        assert_eq!(Direction::parse("descend").unwrap(), Direction::Descend);
        assert!(matches!(
            Direction::parse("sideways"),
            Err(PatternError::BadDirection(_))
        ));
    }

    #[test]
    fn config_rejects_reversed_range() {
        let result = SearchConfig::new(
            Instrument::standard_guitar(),
            FretRange::new(5, 2),
            Direction::Ascend,
            11,
            martino(),
        );
        assert!(matches!(
            result,
            Err(PatternError::ReversedFretRange { start: 5, stop: 2 })
        ));
    }

    #[test]
    fn config_rejects_bad_start_note() {
        let result = SearchConfig::new(
            Instrument::standard_guitar(),
            FretRange::new(2, 5),
            Direction::Ascend,
            12,
            martino(),
        );
        assert!(matches!(result, Err(PatternError::BadStartNote(12))));
    }

    #[test]
    fn config_rejects_short_target() {
        let result = SearchConfig::new(
            Instrument::standard_guitar(),
            FretRange::new(2, 5),
            Direction::Ascend,
            11,
            parse_target("5,2 3,5").unwrap(),
        );
        assert!(matches!(result, Err(PatternError::BadTargetLength(2))));
    }

    #[test]
    fn config_rejects_empty_instrument() {
        let result = SearchConfig::new(
            Instrument { strings: vec![] },
            FretRange::new(2, 5),
            Direction::Ascend,
            11,
            martino(),
        );
        assert!(matches!(result, Err(PatternError::NoStrings)));
    }
}
