//! Letter-coverage ranking of candidates
//!
//! Scores each word by the sum of `1 / frequency` over its distinct letters, where
//! frequency is the number of candidates containing the letter at least once.
//! Words built from letters that are rare among the remaining candidates split
//! the set better, so they rank first.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Default number of ranked words shown per round
pub const DEFAULT_TOP: usize = 25;

/// A candidate and its coverage score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Count, for each letter, how many words contain it at least once
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FxHashMap<u8, usize> {
    let mut freq = FxHashMap::default();
    for word in words {
        for letter in word.distinct_letters() {
            *freq.entry(letter).or_insert(0) += 1;
        }
    }
    freq
}

/// Rank words by letter coverage, best first
///
/// The sort is stable, so equal scores keep candidate order.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::ranking::rank_by_letter_coverage;
///
/// let words: Vec<Word> = ["slate", "plate", "spicy"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let ranked = rank_by_letter_coverage(&words);
/// assert_eq!(ranked[0].word.text(), "spicy");
/// ```
#[must_use]
pub fn rank_by_letter_coverage(words: &[Word]) -> Vec<ScoredWord> {
    if words.is_empty() {
        return Vec::new();
    }

    let freq = letter_frequencies(words);

    let mut scored: Vec<ScoredWord> = words
        .iter()
        .map(|word| ScoredWord {
            score: coverage_score(word, &freq),
            word: word.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Rank and keep the best `n`
#[must_use]
pub fn top_ranked(words: &[Word], n: usize) -> Vec<ScoredWord> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = rank_by_letter_coverage(words);
    ranked.truncate(n);
    ranked
}

fn coverage_score(word: &Word, freq: &FxHashMap<u8, usize>) -> f64 {
    word.distinct_letters()
        .into_iter()
        .filter_map(|letter| freq.get(&letter))
        .map(|&count| 1.0 / count as f64)
        .sum()
}
