//! Self-play against a known target
//!
//! Plays the helper against a target word: each turn guesses the best-ranked
//! candidate not tried yet, scores it against the target the way the game would,
//! and feeds that feedback back through the session.

use crate::core::{RoundFeedback, Word};
use crate::ranking::rank_by_letter_coverage;
use crate::session::Session;
use crate::wordlists::words_of_length;
use anyhow::{Context, Result, bail, ensure};
use log::debug;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub first_guess: Option<String>,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            first_guess: None,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: RoundFeedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Coverage score, absent for a forced guess
    pub score: Option<f64>,
}

/// Solve a specific word against the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The target or forced first guess is not a valid word
/// - The target is not in the dictionary
/// - The forced first guess has a different length than the target
pub fn solve_word(config: &SolveConfig, dictionary: &[String]) -> Result<SolveResult> {
    let target = Word::new(&config.target)
        .with_context(|| format!("invalid target word '{}'", config.target))?;
    let length = target.len();

    let pool = words_of_length(dictionary, length);
    ensure!(
        pool.contains(&target),
        "target '{target}' is not in the word list"
    );

    let forced_first = match &config.first_guess {
        Some(text) => {
            let word =
                Word::new(text).with_context(|| format!("invalid first guess '{text}'"))?;
            ensure!(
                word.len() == length,
                "first guess '{word}' must be {length} letters"
            );
            Some(word)
        }
        None => None,
    };

    let mut session = Session::new(dictionary).with_top(0);
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 0..config.max_guesses {
        let candidates = if turn == 0 {
            pool.as_slice()
        } else {
            session.candidates()
        };
        let candidates_before = candidates.len();

        let (guess, score) = match (turn, &forced_first) {
            (0, Some(forced)) => (forced.clone(), None),
            _ => match best_untried(candidates, &guesses) {
                Some((word, score)) => (word, Some(score)),
                None => bail!("no candidates remain for '{target}'"),
            },
        };

        let feedback = RoundFeedback::score(&guess, &target);
        let solved = feedback.is_solved(length);
        let report = session.apply_feedback(guess.clone(), feedback.clone())?;

        debug!(
            "turn {}: {guess} leaves {} candidates",
            turn + 1,
            report.remaining
        );

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: report.remaining,
            score,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: config.target.to_lowercase(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: config.target.to_lowercase(),
    })
}

/// Best-ranked candidate that has not been guessed yet
fn best_untried(candidates: &[Word], history: &[GuessStep]) -> Option<(Word, f64)> {
    rank_by_letter_coverage(candidates)
        .into_iter()
        .find(|scored| !history.iter().any(|step| step.word == scored.word.text()))
        .map(|scored| (scored.word, scored.score))
}
