//! Accumulated constraints across rounds
//!
//! Four monotonic sets built from feedback: fixed positions, minimum letter
//! counts, banned positions, and excluded letters. Each round only ever adds to
//! them; nothing is removed.

use crate::core::{FixedLetters, RoundFeedback, Word};
use log::debug;
use rustc_hash::FxHashMap;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Letter to minimum number of occurrences
pub type MinimumCounts = BTreeMap<u8, usize>;

/// Letter to positions (0-based) where it is known not to be
pub type BannedPositions = BTreeMap<u8, BTreeSet<usize>>;

/// Letters known to be absent
pub type ExcludedLetters = BTreeSet<u8>;

/// A round tried to fix a different letter at an already fixed position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConflict {
    /// 0-based position
    pub position: usize,
    pub existing: u8,
    pub requested: u8,
}

impl fmt::Display for FixedConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} is already fixed to '{}', cannot change it to '{}'",
            self.position + 1,
            char::from(self.existing),
            char::from(self.requested)
        )
    }
}

impl std::error::Error for FixedConflict {}

/// Global constraints accumulated from every accepted round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed: FixedLetters,
    min_counts: MinimumCounts,
    banned: BannedPositions,
    excluded: ExcludedLetters,
}

impl Constraints {
    /// Empty constraints, every word passes
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn fixed(&self) -> &FixedLetters {
        &self.fixed
    }

    #[must_use]
    pub const fn min_counts(&self) -> &MinimumCounts {
        &self.min_counts
    }

    #[must_use]
    pub const fn banned(&self) -> &BannedPositions {
        &self.banned
    }

    #[must_use]
    pub const fn excluded(&self) -> &ExcludedLetters {
        &self.excluded
    }

    /// Minimum required occurrences of a letter (0 when unconstrained)
    #[must_use]
    pub fn min_count(&self, letter: u8) -> usize {
        self.min_counts.get(&letter).copied().unwrap_or(0)
    }

    /// Positions a letter is banned from (empty when unconstrained)
    pub fn banned_at(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.banned.get(&letter).into_iter().flatten().copied()
    }

    /// True if any round asserted the letter is in the word
    #[must_use]
    pub fn is_asserted(&self, letter: u8) -> bool {
        is_asserted(letter, &self.fixed, &self.min_counts, &self.banned)
    }

    /// Excluded letters that no later round contradicted
    pub fn effective_excluded(&self) -> impl Iterator<Item = u8> + '_ {
        self.excluded
            .iter()
            .copied()
            .filter(|&letter| !self.is_asserted(letter))
    }

    /// No constraint recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty()
            && self.min_counts.is_empty()
            && self.banned.is_empty()
            && self.excluded.is_empty()
    }

    /// Total number of recorded entries across all four sets
    ///
    /// Banned positions count one per `(letter, position)` pair.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.fixed.len()
            + self.min_counts.len()
            + self.banned.values().map(BTreeSet::len).sum::<usize>()
            + self.excluded.len()
    }

    /// Check a round against the fixed positions already known
    ///
    /// # Errors
    /// Returns `FixedConflict` for the first position the round would re-fix
    /// to a different letter.
    pub fn check_round(&self, round: &RoundFeedback) -> Result<(), FixedConflict> {
        for (&position, &requested) in &round.fixed {
            if let Some(&existing) = self.fixed.get(&position)
                && existing != requested
            {
                return Err(FixedConflict {
                    position,
                    existing,
                    requested,
                });
            }
        }
        Ok(())
    }

    /// Fold one round of feedback into these constraints
    ///
    /// Letter counts come from this round's feedback only:
    /// 1. Fixed positions whose letter matches the guess count toward that letter
    /// 2. Present entries count when the guess holds that letter at that position;
    ///    the position is banned for the letter either way
    /// 3. Minimum counts rise to the round's count
    /// 4. Guess letters with a zero count are excluded
    ///
    /// Counting happens before exclusion so that a repeated guess letter marked
    /// elsewhere is not excluded.
    ///
    /// # Errors
    /// Returns `FixedConflict` without changing anything if the round contradicts
    /// a fixed position.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::constraints::Constraints;
    /// use wordle_helper::core::{RoundFeedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let round = RoundFeedback::parse("..a.e", "", 5).unwrap();
    ///
    /// let mut constraints = Constraints::new();
    /// constraints.apply_round(&guess, &round).unwrap();
    ///
    /// assert_eq!(constraints.min_count(b'a'), 1);
    /// assert!(constraints.excluded().contains(&b'c'));
    /// ```
    pub fn apply_round(&mut self, guess: &Word, round: &RoundFeedback) -> Result<(), FixedConflict> {
        self.check_round(round)?;

        let mut round_counts: FxHashMap<u8, usize> = FxHashMap::default();

        for (i, &ch) in guess.chars().iter().enumerate() {
            if round.fixed.get(&i) == Some(&ch) {
                *round_counts.entry(ch).or_insert(0) += 1;
            }
        }

        for &(letter, position) in &round.present {
            if guess.char_at(position) == Some(letter) {
                *round_counts.entry(letter).or_insert(0) += 1;
            }
            self.banned.entry(letter).or_default().insert(position);
        }

        for (&letter, &count) in &round_counts {
            let min = self.min_counts.entry(letter).or_insert(0);
            *min = (*min).max(count);
        }

        for letter in guess.distinct_letters() {
            if round_counts.get(&letter).copied().unwrap_or(0) == 0 {
                self.excluded.insert(letter);
            }
        }

        self.fixed.extend(&round.fixed);

        debug!(
            "applied round for '{guess}': counts {:?}, {} constraint entries",
            round_counts
                .iter()
                .map(|(&ch, &n)| (char::from(ch), n))
                .collect::<BTreeMap<_, _>>(),
            self.entry_count()
        );

        Ok(())
    }

    /// Same as `apply_round`, but returns a new value and leaves `self` untouched
    ///
    /// # Errors
    /// Returns `FixedConflict` if the round contradicts a fixed position.
    pub fn with_round(&self, guess: &Word, round: &RoundFeedback) -> Result<Self, FixedConflict> {
        let mut next = self.clone();
        next.apply_round(guess, round)?;
        Ok(next)
    }
}

/// A letter counts as asserted once it is fixed, required, or known misplaced
pub(crate) fn is_asserted(
    letter: u8,
    fixed: &FixedLetters,
    min_counts: &MinimumCounts,
    banned: &BannedPositions,
) -> bool {
    min_counts.get(&letter).is_some_and(|&n| n > 0)
        || fixed.values().any(|&ch| ch == letter)
        || banned.contains_key(&letter)
}
