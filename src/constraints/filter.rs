//! Candidate filtering against accumulated constraints

use super::state::{BannedPositions, Constraints, ExcludedLetters, MinimumCounts, is_asserted};
use crate::core::{FixedLetters, Word};
use rayon::prelude::*;

/// Check whether a word satisfies every constraint
///
/// A word is consistent when:
/// - every fixed position holds the required letter
/// - no excluded letter appears, unless a round later asserted that letter
/// - every letter with banned positions appears, and at none of them
/// - every minimum letter count is met
///
/// # Examples
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use wordle_helper::constraints::is_consistent;
/// use wordle_helper::core::Word;
///
/// let fixed = BTreeMap::from([(2, b'a')]);
/// let excluded = BTreeSet::from([b'c']);
/// let word = Word::new("slate").unwrap();
///
/// assert!(is_consistent(&word, &fixed, &BTreeMap::new(), &BTreeMap::new(), &excluded));
/// ```
#[must_use]
pub fn is_consistent(
    word: &Word,
    fixed: &FixedLetters,
    min_counts: &MinimumCounts,
    banned: &BannedPositions,
    excluded: &ExcludedLetters,
) -> bool {
    if !fixed.iter().all(|(&i, &ch)| word.char_at(i) == Some(ch)) {
        return false;
    }

    if excluded
        .iter()
        .any(|&ch| word.has_letter(ch) && !is_asserted(ch, fixed, min_counts, banned))
    {
        return false;
    }

    for (&letter, positions) in banned {
        if !word.has_letter(letter) {
            return false;
        }
        if positions.iter().any(|&i| word.char_at(i) == Some(letter)) {
            return false;
        }
    }

    min_counts
        .iter()
        .all(|(&letter, &need)| word.count_of(letter) >= need)
}

impl Constraints {
    /// Check a single word against these constraints
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        is_consistent(
            word,
            self.fixed(),
            self.min_counts(),
            self.banned(),
            self.excluded(),
        )
    }
}

/// Keep the words consistent with the constraints, preserving their order
#[must_use]
pub fn filter_candidates(words: &[Word], constraints: &Constraints) -> Vec<Word> {
    words
        .par_iter()
        .filter(|word| constraints.is_consistent(word))
        .cloned()
        .collect()
}
