//! Per-round feedback parsing and representation
//!
//! Feedback for a guess arrives as two strings:
//! - a fixed pattern such as `.r..e`, where `.` or `_` means unknown and a letter
//!   means that letter is confirmed at that position (green)
//! - a present-misplaced list such as `a@3 n@5`, 1-based, space or comma
//!   separated, meaning the letter is in the word but not at that position (yellow)
//!
//! Letters of the guess mentioned in neither are treated as absent (grey) by the
//! constraint accumulator.

use super::Word;
use std::collections::BTreeMap;
use std::fmt;

/// Position (0-based) to required letter
pub type FixedLetters = BTreeMap<usize, u8>;

/// Present-but-misplaced `(letter, position)` pairs, 0-based
pub type PresentLetters = Vec<(u8, usize)>;

/// Placeholder characters accepted for unknown positions
pub const PLACEHOLDERS: [char; 2] = ['.', '_'];

/// Malformed feedback input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fixed pattern has the wrong number of characters
    PatternLength { expected: usize, found: usize },
    /// Fixed pattern holds something other than a letter or placeholder (1-based position)
    InvalidPatternChar { position: usize, found: char },
    /// Present-misplaced token without `@`
    MissingSeparator(String),
    /// Letter part of a token is not exactly one ASCII letter
    InvalidLetter(String),
    /// Position part of a token is not an integer
    InvalidPosition(String),
    /// Position outside `1..=length`
    PositionOutOfRange { position: i64, length: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatternLength { expected, found } => {
                write!(
                    f,
                    "Pattern must be exactly {expected} characters, got {found}"
                )
            }
            Self::InvalidPatternChar { position, found } => write!(
                f,
                "Fixed pattern must contain letters or '.' only ('{found}' at position {position})"
            ),
            Self::MissingSeparator(token) => {
                write!(f, "Entry '{token}' must be like letter@pos (1-based)")
            }
            Self::InvalidLetter(letter) => write!(f, "Bad letter '{letter}'"),
            Self::InvalidPosition(pos) => write!(f, "Bad position '{pos}'"),
            Self::PositionOutOfRange { position, length } => {
                write!(f, "Position {position} out of range 1..{length}")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Parse a fixed-letter pattern like `.r..e` into `{1: 'r', 4: 'e'}`
///
/// Surrounding whitespace is ignored. Letters are lowercased.
///
/// # Errors
/// Returns `FormatError::PatternLength` if the pattern does not have exactly
/// `word_length` characters, or `FormatError::InvalidPatternChar` for anything
/// that is not an ASCII letter or placeholder.
///
/// # Examples
/// ```
/// use wordle_helper::core::parse_fixed_pattern;
///
/// let fixed = parse_fixed_pattern(".r..e", 5).unwrap();
/// assert_eq!(fixed.get(&1), Some(&b'r'));
/// assert_eq!(fixed.get(&4), Some(&b'e'));
/// assert_eq!(fixed.len(), 2);
/// ```
pub fn parse_fixed_pattern(pattern: &str, word_length: usize) -> Result<FixedLetters, FormatError> {
    let pattern = pattern.trim();
    let found = pattern.chars().count();
    if found != word_length {
        return Err(FormatError::PatternLength {
            expected: word_length,
            found,
        });
    }

    let mut fixed = FixedLetters::new();
    for (i, ch) in pattern.chars().enumerate() {
        if PLACEHOLDERS.contains(&ch) {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(FormatError::InvalidPatternChar {
                position: i + 1,
                found: ch,
            });
        }
        fixed.insert(i, ch.to_ascii_lowercase() as u8);
    }

    Ok(fixed)
}

/// Parse present-misplaced entries like `a@3 n@5` into `[('a', 2), ('n', 4)]`
///
/// Tokens may be separated by spaces, commas, or both. Blank input yields no entries.
///
/// # Errors
/// Returns a `FormatError` for the first malformed token.
///
/// # Examples
/// ```
/// use wordle_helper::core::parse_present_misplaced;
///
/// let present = parse_present_misplaced("a@3, n@5", 5).unwrap();
/// assert_eq!(present, vec![(b'a', 2), (b'n', 4)]);
///
/// assert!(parse_present_misplaced("  ", 5).unwrap().is_empty());
/// assert!(parse_present_misplaced("a@6", 5).is_err());
/// ```
pub fn parse_present_misplaced(
    input: &str,
    word_length: usize,
) -> Result<PresentLetters, FormatError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| parse_present_token(token, word_length))
        .collect()
}

fn parse_present_token(token: &str, word_length: usize) -> Result<(u8, usize), FormatError> {
    let (letter, pos) = token
        .split_once('@')
        .ok_or_else(|| FormatError::MissingSeparator(token.to_string()))?;

    let mut letters = letter.chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase() as u8,
        _ => return Err(FormatError::InvalidLetter(letter.to_string())),
    };

    let position: i64 = match pos.parse() {
        Ok(position) => position,
        Err(_) if is_integer(pos) => {
            let position = if pos.starts_with('-') { i64::MIN } else { i64::MAX };
            return Err(FormatError::PositionOutOfRange {
                position,
                length: word_length,
            });
        }
        Err(_) => return Err(FormatError::InvalidPosition(pos.to_string())),
    };

    if !(1..=word_length as i64).contains(&position) {
        return Err(FormatError::PositionOutOfRange {
            position,
            length: word_length,
        });
    }

    Ok((letter, (position - 1) as usize))
}

/// Optionally signed run of ASCII digits
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Structured feedback for one round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundFeedback {
    pub fixed: FixedLetters,
    pub present: PresentLetters,
}

impl RoundFeedback {
    /// Parse both feedback strings for a word of the given length
    ///
    /// # Errors
    /// Returns the first `FormatError` from either parser.
    pub fn parse(
        fixed_pattern: &str,
        present_pattern: &str,
        word_length: usize,
    ) -> Result<Self, FormatError> {
        Ok(Self {
            fixed: parse_fixed_pattern(fixed_pattern, word_length)?,
            present: parse_present_misplaced(present_pattern, word_length)?,
        })
    }

    /// Compute the feedback the game gives when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the answer's letter pool
    /// 2. Second pass: mark misplaced letters while the pool still holds that letter
    ///
    /// Extra copies of a letter beyond what the answer holds get no mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{RoundFeedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("react").unwrap();
    /// let feedback = RoundFeedback::score(&guess, &answer);
    ///
    /// assert_eq!(feedback.fixed_pattern(5), "..a..");
    /// assert_eq!(feedback.present_pattern(), "c@1 r@2 e@5");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut fixed = FixedLetters::new();
        let mut available = answer.char_counts();

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                fixed.insert(i, g);
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        let mut present = PresentLetters::new();
        for (i, &g) in guess.chars().iter().enumerate() {
            if fixed.contains_key(&i) {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                present.push((g, i));
                *count -= 1;
            }
        }

        Self { fixed, present }
    }

    /// Every position of a `word_length` word is fixed
    #[must_use]
    pub fn is_solved(&self, word_length: usize) -> bool {
        word_length > 0 && (0..word_length).all(|i| self.fixed.contains_key(&i))
    }

    /// Render the fixed letters back into pattern form (`.r..e`)
    #[must_use]
    pub fn fixed_pattern(&self, word_length: usize) -> String {
        (0..word_length)
            .map(|i| self.fixed.get(&i).map_or('.', |&ch| char::from(ch)))
            .collect()
    }

    /// Render present-misplaced entries back into `letter@pos` form (1-based)
    #[must_use]
    pub fn present_pattern(&self) -> String {
        self.present
            .iter()
            .map(|&(letter, pos)| format!("{}@{}", char::from(letter), pos + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_pattern_round_trip_example() {
        let fixed = parse_fixed_pattern(".r..e", 5).unwrap();
        let expected: FixedLetters = [(1, b'r'), (4, b'e')].into_iter().collect();
        assert_eq!(fixed, expected);
    }

    #[test]
    fn fixed_pattern_accepts_underscore_and_uppercase() {
        let fixed = parse_fixed_pattern(" _R__E ", 5).unwrap();
        assert_eq!(fixed.get(&1), Some(&b'r'));
        assert_eq!(fixed.get(&4), Some(&b'e'));
    }

    #[test]
    fn fixed_pattern_all_unknown() {
        assert!(parse_fixed_pattern(".....", 5).unwrap().is_empty());
    }

    #[test]
    fn fixed_pattern_wrong_length() {
        assert_eq!(
            parse_fixed_pattern("..a.", 5),
            Err(FormatError::PatternLength {
                expected: 5,
                found: 4
            })
        );
        assert!(parse_fixed_pattern("..a...", 5).is_err());
    }

    #[test]
    fn fixed_pattern_bad_character() {
        assert_eq!(
            parse_fixed_pattern(".r.3e", 5),
            Err(FormatError::InvalidPatternChar {
                position: 4,
                found: '3'
            })
        );
        assert!(parse_fixed_pattern(".r-.e", 5).is_err());
        assert!(parse_fixed_pattern(".é..e", 5).is_err());
    }

    #[test]
    fn present_round_trip_example() {
        let present = parse_present_misplaced("a@3 n@5", 5).unwrap();
        assert_eq!(present, vec![(b'a', 2), (b'n', 4)]);
    }

    #[test]
    fn present_mixed_separators_and_case() {
        let present = parse_present_misplaced(" A@1,,n@2 ,  e@5 ", 5).unwrap();
        assert_eq!(present, vec![(b'a', 0), (b'n', 1), (b'e', 4)]);
    }

    #[test]
    fn present_empty_input() {
        assert!(parse_present_misplaced("", 5).unwrap().is_empty());
        assert!(parse_present_misplaced(" \t ", 5).unwrap().is_empty());
        assert!(parse_present_misplaced(" , ", 5).unwrap().is_empty());
    }

    #[test]
    fn present_missing_separator() {
        assert_eq!(
            parse_present_misplaced("a3", 5),
            Err(FormatError::MissingSeparator("a3".to_string()))
        );
    }

    #[test]
    fn present_bad_letter() {
        assert_eq!(
            parse_present_misplaced("ab@3", 5),
            Err(FormatError::InvalidLetter("ab".to_string()))
        );
        assert!(parse_present_misplaced("@3", 5).is_err());
        assert!(parse_present_misplaced("1@3", 5).is_err());
    }

    #[test]
    fn present_bad_position() {
        assert_eq!(
            parse_present_misplaced("a@x", 5),
            Err(FormatError::InvalidPosition("x".to_string()))
        );
        assert!(parse_present_misplaced("a@", 5).is_err());
        assert!(parse_present_misplaced("a@b@3", 5).is_err());
    }

    #[test]
    fn present_position_out_of_range() {
        assert_eq!(
            parse_present_misplaced("a@0", 5),
            Err(FormatError::PositionOutOfRange {
                position: 0,
                length: 5
            })
        );
        assert_eq!(
            parse_present_misplaced("a@6", 5),
            Err(FormatError::PositionOutOfRange {
                position: 6,
                length: 5
            })
        );
        assert!(parse_present_misplaced("a@-1", 5).is_err());
    }

    #[test]
    fn present_position_past_integer_range() {
        assert_eq!(
            parse_present_misplaced("a@99999999999999999999", 5),
            Err(FormatError::PositionOutOfRange {
                position: i64::MAX,
                length: 5
            })
        );
        assert!(matches!(
            parse_present_misplaced("a@-99999999999999999999", 5),
            Err(FormatError::PositionOutOfRange { .. })
        ));
        assert_eq!(
            parse_present_misplaced("a@9x", 5),
            Err(FormatError::InvalidPosition("9x".to_string()))
        );
    }

    #[test]
    fn round_feedback_parse_reports_first_error() {
        assert!(RoundFeedback::parse(".r..e", "a@3", 5).is_ok());
        assert!(matches!(
            RoundFeedback::parse(".r..", "a@3", 5),
            Err(FormatError::PatternLength { .. })
        ));
        assert!(matches!(
            RoundFeedback::parse(".r..e", "a3", 5),
            Err(FormatError::MissingSeparator(_))
        ));
    }

    #[test]
    fn score_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let answer = Word::new("fghij").unwrap();
        let feedback = RoundFeedback::score(&guess, &answer);
        assert!(feedback.fixed.is_empty());
        assert!(feedback.present.is_empty());
    }

    #[test]
    fn score_exact_match_is_solved() {
        let word = Word::new("crane").unwrap();
        let feedback = RoundFeedback::score(&word, &word);
        assert!(feedback.is_solved(5));
        assert_eq!(feedback.fixed_pattern(5), "crane");
        assert!(feedback.present.is_empty());
    }

    #[test]
    fn score_duplicate_letters_both_misplaced() {
        // SPEED vs ERASE: S and both E's are misplaced
        let guess = Word::new("speed").unwrap();
        let answer = Word::new("erase").unwrap();
        let feedback = RoundFeedback::score(&guess, &answer);

        assert!(feedback.fixed.is_empty());
        assert_eq!(feedback.present, vec![(b's', 0), (b'e', 2), (b'e', 3)]);
    }

    #[test]
    fn score_exact_match_takes_priority() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        let guess = Word::new("robot").unwrap();
        let answer = Word::new("floor").unwrap();
        let feedback = RoundFeedback::score(&guess, &answer);

        assert_eq!(feedback.fixed_pattern(5), "...o.");
        assert_eq!(feedback.present, vec![(b'r', 0), (b'o', 1)]);
    }

    #[test]
    fn score_extra_copies_get_no_mark() {
        // EERIE vs CRANE: only the final E is marked
        let guess = Word::new("eerie").unwrap();
        let answer = Word::new("crane").unwrap();
        let feedback = RoundFeedback::score(&guess, &answer);

        assert_eq!(feedback.fixed_pattern(5), "....e");
        assert_eq!(feedback.present, vec![(b'r', 2)]);
    }

    #[test]
    fn rendered_feedback_parses_back() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("react").unwrap();
        let feedback = RoundFeedback::score(&guess, &answer);

        let parsed =
            RoundFeedback::parse(&feedback.fixed_pattern(5), &feedback.present_pattern(), 5).unwrap();
        assert_eq!(parsed, feedback);
    }
}
