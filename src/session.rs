//! Helper session state
//!
//! A session owns everything that changes between rounds: the established word
//! length, and one snapshot (constraints plus surviving candidates) per accepted
//! round. A round is validated completely before anything is stored, so a
//! rejected round leaves the session exactly as it was.

use crate::constraints::{Constraints, FixedConflict, filter_candidates};
use crate::core::{FormatError, RoundFeedback, Word, WordError};
use crate::ranking::{DEFAULT_TOP, ScoredWord, top_ranked};
use crate::wordlists::words_of_length;
use log::{debug, info, warn};
use std::fmt;

/// Why a round was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The guess is not a word
    InvalidGuess(WordError),
    /// The guess length differs from the session's word length
    LengthMismatch { expected: usize, found: usize },
    /// Malformed fixed pattern or present-misplaced entries
    Format(FormatError),
    /// The round re-fixes a position to a different letter
    Conflict(FixedConflict),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "{e}"),
            Self::LengthMismatch { expected, .. } => {
                write!(f, "Guess must be length {expected}")
            }
            Self::Format(e) => write!(f, "{e}"),
            Self::Conflict(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Conflict(e) => Some(e),
            Self::LengthMismatch { .. } => None,
        }
    }
}

impl From<WordError> for RoundError {
    fn from(e: WordError) -> Self {
        Self::InvalidGuess(e)
    }
}

impl From<FormatError> for RoundError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<FixedConflict> for RoundError {
    fn from(e: FixedConflict) -> Self {
        Self::Conflict(e)
    }
}

/// Snapshot after one accepted round
#[derive(Debug, Clone)]
pub struct Round {
    pub guess: Word,
    pub feedback: RoundFeedback,
    pub constraints: Constraints,
    pub candidates: Vec<Word>,
}

/// What the helper shows after a round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    pub word_length: usize,
    pub remaining: usize,
    pub ranked: Vec<ScoredWord>,
    pub constraints: Constraints,
}

impl RoundReport {
    /// No candidate survived; earlier feedback is probably wrong
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

/// One helper session over a dictionary
pub struct Session<'a> {
    dictionary: &'a [String],
    word_length: Option<usize>,
    initial: Vec<Word>,
    rounds: Vec<Round>,
    top: usize,
    empty_constraints: Constraints,
}

impl<'a> Session<'a> {
    /// Start a session over a raw dictionary
    ///
    /// The dictionary is narrowed to the word length of the first accepted guess.
    #[must_use]
    pub fn new(dictionary: &'a [String]) -> Self {
        Self {
            dictionary,
            word_length: None,
            initial: Vec::new(),
            rounds: Vec::new(),
            top: DEFAULT_TOP,
            empty_constraints: Constraints::new(),
        }
    }

    /// Set how many ranked words each report carries
    #[must_use]
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Word length, once the first round has been accepted
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    /// Size of the raw dictionary
    #[must_use]
    pub const fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }

    /// Accepted rounds, oldest first
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Current constraints
    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        self.rounds
            .last()
            .map_or(&self.empty_constraints, |round| &round.constraints)
    }

    /// Current candidates (empty until the word length is known)
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        self.rounds
            .last()
            .map_or(self.initial.as_slice(), |round| round.candidates.as_slice())
    }

    /// Length the next pattern must have for this guess
    #[must_use]
    pub fn expected_length(&self, guess: &Word) -> usize {
        self.word_length.unwrap_or_else(|| guess.len())
    }

    /// Validate a guess without changing the session
    ///
    /// # Errors
    /// Returns `RoundError::InvalidGuess` for non-alphabetic input and
    /// `RoundError::LengthMismatch` once the word length is established.
    pub fn check_guess(&self, text: &str) -> Result<Word, RoundError> {
        let guess = Word::new(text)?;
        if let Some(expected) = self.word_length
            && guess.len() != expected
        {
            return Err(RoundError::LengthMismatch {
                expected,
                found: guess.len(),
            });
        }
        Ok(guess)
    }

    /// Parse and apply one round of textual feedback
    ///
    /// # Errors
    /// Returns a `RoundError` and leaves the session untouched if any input is
    /// invalid or contradicts a fixed position.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::session::Session;
    ///
    /// let dictionary: Vec<String> = ["crane", "crate", "slate", "plate"]
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    ///
    /// let mut session = Session::new(&dictionary);
    /// let report = session.submit_round("crane", "..a.e", "").unwrap();
    ///
    /// assert_eq!(report.remaining, 2);
    /// assert!(session.submit_round("cranes", "......", "").is_err());
    /// ```
    pub fn submit_round(
        &mut self,
        guess: &str,
        fixed_pattern: &str,
        present_pattern: &str,
    ) -> Result<RoundReport, RoundError> {
        let guess = self.check_guess(guess)?;
        let length = self.expected_length(&guess);
        let feedback = RoundFeedback::parse(fixed_pattern, present_pattern, length)?;
        self.apply_feedback(guess, feedback)
    }

    /// Apply one round of already structured feedback
    ///
    /// # Errors
    /// Same as `submit_round`; positions outside the word are reported as
    /// `FormatError::PositionOutOfRange`.
    pub fn apply_feedback(
        &mut self,
        guess: Word,
        feedback: RoundFeedback,
    ) -> Result<RoundReport, RoundError> {
        let length = self.expected_length(&guess);
        if guess.len() != length {
            return Err(RoundError::LengthMismatch {
                expected: length,
                found: guess.len(),
            });
        }

        let out_of_range = feedback
            .fixed
            .keys()
            .copied()
            .chain(feedback.present.iter().map(|&(_, pos)| pos))
            .find(|&pos| pos >= length);
        if let Some(pos) = out_of_range {
            return Err(FormatError::PositionOutOfRange {
                position: pos as i64 + 1,
                length,
            }
            .into());
        }

        let constraints = self.constraints().with_round(&guess, &feedback)?;

        if self.word_length.is_none() {
            self.establish_length(length);
        }

        let candidates = filter_candidates(self.candidates(), &constraints);
        debug!(
            "round {}: '{guess}' narrowed {} -> {} candidates",
            self.rounds.len() + 1,
            self.candidates().len(),
            candidates.len()
        );
        if candidates.is_empty() {
            warn!("no candidates remain after '{guess}'");
        }

        self.rounds.push(Round {
            guess,
            feedback,
            constraints,
            candidates,
        });

        Ok(self.report())
    }

    /// Report for the current state
    #[must_use]
    pub fn report(&self) -> RoundReport {
        let candidates = self.candidates();
        RoundReport {
            round: self.rounds.len(),
            word_length: self.word_length.unwrap_or(0),
            remaining: candidates.len(),
            ranked: top_ranked(candidates, self.top),
            constraints: self.constraints().clone(),
        }
    }

    /// Drop the last accepted round
    pub fn undo(&mut self) -> Option<Round> {
        let round = self.rounds.pop();
        if let Some(round) = &round {
            debug!("undid round '{}'", round.guess);
        }
        round
    }

    /// Drop every round; the word length stays as established
    pub fn reset(&mut self) {
        self.rounds.clear();
    }

    fn establish_length(&mut self, length: usize) {
        self.word_length = Some(length);
        self.initial = words_of_length(self.dictionary, length);
        info!(
            "word length {length}: {} of {} dictionary words",
            self.initial.len(),
            self.dictionary.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn dictionary(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn crane_scenario() {
        let dict = dictionary(&["crane", "crate", "slate", "plate"]);
        let mut session = Session::new(&dict);

        let report = session.submit_round("crane", "..a.e", "").unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.remaining, 2);
        assert_eq!(texts(session.candidates()), vec!["slate", "plate"]);
        assert_eq!(
            report.constraints.excluded(),
            &BTreeSet::from([b'c', b'n', b'r'])
        );
        assert_eq!(report.constraints.min_count(b'a'), 1);
        assert_eq!(report.constraints.min_count(b'e'), 1);
    }

    #[test]
    fn first_round_establishes_length() {
        let dict = dictionary(&["crane", "cranes", "ox", "slate", "sl4te"]);
        let mut session = Session::new(&dict);
        assert_eq!(session.word_length(), None);
        assert!(session.candidates().is_empty());

        session.submit_round("ADIEU", ".....", "").unwrap();
        assert_eq!(session.word_length(), Some(5));

        // sl4te is dropped; both remaining words hold excluded letters
        assert_eq!(texts(session.candidates()), Vec::<&str>::new());
        session.undo();
        assert_eq!(texts(session.candidates()), vec!["crane", "slate"]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let dict = dictionary(&["crane", "slate"]);
        let mut session = Session::new(&dict);
        session.submit_round("crane", ".....", "").unwrap();

        assert_eq!(
            session.submit_round("cranes", "......", ""),
            Err(RoundError::LengthMismatch {
                expected: 5,
                found: 6
            })
        );
        assert!(session.check_guess("ox").is_err());
        assert!(session.check_guess("slate").is_ok());
    }

    #[test]
    fn invalid_guess_rejected() {
        let dict = dictionary(&["crane"]);
        let mut session = Session::new(&dict);
        assert!(matches!(
            session.submit_round("cr4ne", ".....", ""),
            Err(RoundError::InvalidGuess(_))
        ));
        assert_eq!(session.word_length(), None);
    }

    #[test]
    fn rejected_round_leaves_state_untouched() {
        let dict = dictionary(&["crane", "crate", "slate", "plate"]);
        let mut session = Session::new(&dict);
        session.submit_round("crane", "..a.e", "").unwrap();
        let constraints = session.constraints().clone();

        assert!(matches!(
            session.submit_round("slate", "..a.", ""),
            Err(RoundError::Format(FormatError::PatternLength { .. }))
        ));
        assert!(matches!(
            session.submit_round("slate", "..a.e", "s@9"),
            Err(RoundError::Format(FormatError::PositionOutOfRange { .. }))
        ));
        assert!(matches!(
            session.submit_round("slate", "..o.e", ""),
            Err(RoundError::Conflict(_))
        ));

        assert_eq!(session.rounds().len(), 1);
        assert_eq!(session.constraints(), &constraints);
        assert_eq!(texts(session.candidates()), vec!["slate", "plate"]);
    }

    #[test]
    fn first_round_error_does_not_establish_length() {
        let dict = dictionary(&["crane", "ox"]);
        let mut session = Session::new(&dict);
        assert!(session.submit_round("ox", "...", "").is_err());
        assert_eq!(session.word_length(), None);

        session.submit_round("crane", "c....", "").unwrap();
        assert_eq!(session.word_length(), Some(5));
    }

    #[test]
    fn candidates_shrink_monotonically() {
        let dict = dictionary(&[
            "crane", "crate", "slate", "plate", "grate", "irate", "skate", "state", "elate",
            "alert", "later",
        ]);
        let mut session = Session::new(&dict);

        let mut previous: Option<Vec<Word>> = None;
        for (guess, fixed, present) in [
            ("crane", "..a.e", ""),
            ("irate", "..ate", ""),
            ("slate", "..ate", ""),
        ] {
            session.submit_round(guess, fixed, present).unwrap();
            let current = session.candidates().to_vec();
            if let Some(previous) = &previous {
                assert!(current.iter().all(|w| previous.contains(w)));
            }
            assert!(current.iter().all(|w| session.constraints().is_consistent(w)));
            previous = Some(current);
        }
    }

    #[test]
    fn empty_candidate_set_is_reported_not_an_error() {
        let dict = dictionary(&["crane", "slate"]);
        let mut session = Session::new(&dict);

        let report = session.submit_round("zzzzz", "zzzzz", "").unwrap();
        assert!(report.is_empty());
        assert!(report.ranked.is_empty());

        // The loop keeps going; constraints are not rolled back
        let report = session.submit_round("crane", ".....", "").unwrap();
        assert!(report.is_empty());
        assert_eq!(report.round, 2);
    }

    #[test]
    fn undo_and_reset() {
        let dict = dictionary(&["crane", "crate", "slate", "plate"]);
        let mut session = Session::new(&dict);
        session.submit_round("crane", "..a.e", "").unwrap();
        session.submit_round("slate", "..ate", "").unwrap();
        assert_eq!(session.rounds().len(), 2);

        let undone = session.undo().unwrap();
        assert_eq!(undone.guess.text(), "slate");
        assert_eq!(session.rounds().len(), 1);

        session.reset();
        assert!(session.rounds().is_empty());
        assert!(session.constraints().is_empty());
        assert_eq!(session.word_length(), Some(5));
        assert_eq!(session.candidates().len(), 4);
        assert!(session.undo().is_none());
    }

    #[test]
    fn report_respects_top() {
        let dict = dictionary(&["crane", "crate", "slate", "plate", "grate"]);
        let mut session = Session::new(&dict).with_top(2);
        let report = session.submit_round("adieu", ".....", "").unwrap();

        assert_eq!(report.ranked.len(), 0);
        session.undo();

        let report = session.submit_round("bumpy", ".....", "").unwrap();
        assert_eq!(report.remaining, 4);
        assert_eq!(report.ranked.len(), 2);
    }

    #[test]
    fn structured_feedback_out_of_range_rejected() {
        let dict = dictionary(&["crane"]);
        let mut session = Session::new(&dict);
        let guess = Word::new("crane").unwrap();
        let feedback = RoundFeedback {
            fixed: [(7, b'c')].into_iter().collect(),
            present: Vec::new(),
        };

        assert!(matches!(
            session.apply_feedback(guess, feedback),
            Err(RoundError::Format(FormatError::PositionOutOfRange {
                position: 8,
                length: 5
            }))
        ));
    }

    #[test]
    fn truthful_feedback_never_drops_the_answer() {
        let words = [
            "crane", "slate", "speed", "erase", "robot", "floor", "eerie", "geese", "llama",
            "react", "trace", "cater",
        ];
        let dict = dictionary(&words);

        for answer in words {
            let answer = Word::new(answer).unwrap();
            let mut session = Session::new(&dict);
            for guess in ["eerie", "crane", "robot", "llama"] {
                let guess = Word::new(guess).unwrap();
                let feedback = RoundFeedback::score(&guess, &answer);
                session.apply_feedback(guess, feedback).unwrap();
                assert!(
                    session.candidates().contains(&answer),
                    "{answer} dropped"
                );
            }
        }
    }
}
