use std::fmt;

use crate::config::Direction;
use crate::fretboard::FretboardArea;

// 12 polustepena plus the returning octave
pub const SCALE_STEPS: usize = 13;

/// One spot a note can be played at, string numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringFret {
    pub string: usize,
    pub fret: i32,
}

impl StringFret {
    pub fn new(string: usize, fret: i32) -> StringFret {
        StringFret { string, fret }
    }
}

impl fmt::Display for StringFret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.string, self.fret)
    }
}

/// Collect for every scale step the spots of the area that sound the step's
/// note. Strings are walked in declaration order and frets from low to high;
/// the enumeration precedence in patterns.rs is exactly this order.
///
/// A step can come back empty when the area is too small, the enumeration
/// stage reports that as its own outcome.
pub fn step_candidates(
    start_note: i32,
    direction: Direction,
    area: &FretboardArea,
) -> Vec<Vec<StringFret>> {
    let mut combos = Vec::with_capacity(SCALE_STEPS);
    let mut current = start_note.rem_euclid(12);

    for _ in 0..SCALE_STEPS {
        let mut spots = Vec::new();
        for (i, row) in area.notes.iter().enumerate() {
            for (pos, &note) in row.iter().enumerate() {
                if note == current {
                    spots.push(StringFret::new(i + 1, area.range.start + pos as i32));
                }
            }
        }
        combos.push(spots);
        current = (current + direction.step()).rem_euclid(12);
    }

    combos
}
