use num::{BigUint, One};

use crate::candidates::StringFret;
use crate::error::PatternError;

/// Most patterns collect_patterns will hand out as one Vec. Every extra fret
/// in the area roughly doubles the candidates per step, so the full product
/// blows up fast; anything past this has to go through the lazy iterator.
pub const EAGER_CAP: usize = 1_000_000;

/// Exact number of different patterns, the product of the 13 candidate list
/// sizes. BigUint because a wide area overflows u64.
pub fn combination_count(combos: &[Vec<StringFret>]) -> BigUint {
    let mut count = BigUint::one();
    for spots in combos {
        count *= BigUint::from(spots.len());
    }
    count
}

/// Lazy walk over every way of picking one spot per step.
///
/// The per step indices work like an odometer: the last step rolls fastest
/// and the first step slowest, carrying to the left on overflow. Same order
/// the old recursive generator produced, without the call stack. Every
/// pattern handed out is freshly owned, nothing is shared between items.
pub struct Patterns<'a> {
    combos: &'a [Vec<StringFret>],
    index: Vec<usize>,
    done: bool,
}

impl<'a> Patterns<'a> {
    pub fn new(combos: &'a [Vec<StringFret>]) -> Patterns<'a> {
        // a single empty step kills the whole product
        let done = combos.is_empty() || combos.iter().any(|spots| spots.is_empty());
        Patterns {
            combos,
            index: vec![0; combos.len()],
            done,
        }
    }
}

impl<'a> Iterator for Patterns<'a> {
    type Item = Vec<StringFret>;

    fn next(&mut self) -> Option<Vec<StringFret>> {
        if self.done {
            return None;
        }

        let pattern: Vec<StringFret> = self
            .combos
            .iter()
            .zip(&self.index)
            .map(|(spots, &i)| spots[i])
            .collect();

        let mut step = self.combos.len();
        loop {
            if step == 0 {
                self.done = true;
                break;
            }
            step -= 1;
            self.index[step] += 1;
            if self.index[step] < self.combos[step].len() {
                break;
            }
            self.index[step] = 0;
        }

        Some(pattern)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The target sits at this position of the enumeration.
    Found {
        index: usize,
        pattern: Vec<StringFret>,
    },
    /// The whole enumeration ran dry without a match.
    NotFound,
    /// Some step has no playable spot in the area, there is nothing to
    /// enumerate. Not the same thing as NotFound.
    NoPatterns { step: usize },
}

/// Look for the target in the enumeration, first hit wins and stops the
/// walk. An empty enumeration is detected up front and reported as
/// NoPatterns with the first empty step.
pub fn find_pattern(combos: &[Vec<StringFret>], target: &[StringFret]) -> SearchResult {
    if let Some(step) = combos.iter().position(|spots| spots.is_empty()) {
        return SearchResult::NoPatterns { step };
    }

    for (index, pattern) in Patterns::new(combos).enumerate() {
        if pattern == target {
            return SearchResult::Found { index, pattern };
        }
    }

    SearchResult::NotFound
}

/// Materialize the whole enumeration at once. Refuses when the count is past
/// the cap, big areas have to be consumed through the iterator.
pub fn collect_patterns(
    combos: &[Vec<StringFret>],
    cap: usize,
) -> Result<Vec<Vec<StringFret>>, PatternError> {
    let total = combination_count(combos);
    if total > BigUint::from(cap) {
        return Err(PatternError::TooManyPatterns { total, cap });
    }
    Ok(Patterns::new(combos).collect())
}
