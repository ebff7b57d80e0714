use crate::instrument::Instrument;

/// Closed fret interval shared by all strings, the area of activity.
/// Frets outside the physical neck are fine, the note math is modular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretRange {
    pub start: i32,
    pub stop: i32,
}

impl FretRange {
    pub fn new(start: i32, stop: i32) -> FretRange {
        FretRange { start, stop }
    }

    pub fn span(&self) -> usize {
        (self.stop - self.start + 1) as usize
    }

    pub fn frets(&self) -> impl Iterator<Item = i32> {
        self.start..=self.stop
    }
}

/// Notes of the area of activity, one row of pitch classes per string,
/// row position 0 is the lowest fret of the range.
#[derive(Debug, Clone)]
pub struct FretboardArea {
    pub range: FretRange,
    pub notes: Vec<Vec<i32>>,
}

impl FretboardArea {
    /// Pitch class sounding on a string (1-based) at an absolute fret.
    pub fn note_at(&self, string: usize, fret: i32) -> i32 {
        self.notes[string - 1][(fret - self.range.start) as usize]
    }
}

pub fn map_area(instrument: &Instrument, range: FretRange) -> FretboardArea {
    let notes = instrument
        .strings
        .iter()
        .map(|string| {
            range
                .frets()
                .map(|fret| (string.open_note + fret).rem_euclid(12))
                .collect()
        })
        .collect();

    FretboardArea { range, notes }
}
