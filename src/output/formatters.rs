//! Formatting utilities for terminal output

use crate::constraints::Constraints;
use crate::core::RoundFeedback;

/// Placeholder shown for an empty constraint set
pub const NONE: &str = "(none)";

/// Render fixed letters as a pattern like `.r..e`
#[must_use]
pub fn format_fixed(constraints: &Constraints, word_length: usize) -> String {
    if constraints.fixed().is_empty() {
        return NONE.to_string();
    }
    let feedback = RoundFeedback {
        fixed: constraints.fixed().clone(),
        present: Vec::new(),
    };
    feedback.fixed_pattern(word_length)
}

/// Render minimum counts like `a>=1, e>=2`
#[must_use]
pub fn format_min_counts(constraints: &Constraints) -> String {
    if constraints.min_counts().is_empty() {
        return NONE.to_string();
    }
    constraints
        .min_counts()
        .iter()
        .map(|(&letter, &count)| format!("{}>={count}", char::from(letter)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render banned positions (1-based) like `a@[1, 3], n@[5]`
#[must_use]
pub fn format_banned(constraints: &Constraints) -> String {
    if constraints.banned().is_empty() {
        return NONE.to_string();
    }
    constraints
        .banned()
        .iter()
        .map(|(&letter, positions)| {
            let positions = positions
                .iter()
                .map(|pos| (pos + 1).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}@[{positions}]", char::from(letter))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render excluded letters like `cnr`
///
/// Excluded letters that a later round asserted are listed separately.
#[must_use]
pub fn format_excluded(constraints: &Constraints) -> String {
    let effective: String = constraints.effective_excluded().map(char::from).collect();
    let overridden: String = constraints
        .excluded()
        .iter()
        .copied()
        .filter(|&letter| constraints.is_asserted(letter))
        .map(char::from)
        .collect();

    let mut out = if effective.is_empty() {
        NONE.to_string()
    } else {
        effective
    };
    if !overridden.is_empty() {
        out.push_str(&format!(" (overridden: {overridden})"));
    }
    out
}

/// One-line summary of all four constraint sets
///
/// # Examples
/// ```
/// use wordle_helper::constraints::Constraints;
/// use wordle_helper::core::{RoundFeedback, Word};
/// use wordle_helper::output::formatters::format_constraints;
///
/// let guess = Word::new("crane").unwrap();
/// let round = RoundFeedback::parse("..a.e", "", 5).unwrap();
/// let constraints = Constraints::new().with_round(&guess, &round).unwrap();
///
/// assert_eq!(
///     format_constraints(&constraints, 5),
///     "fixed: ..a.e  mins: a>=1, e>=1  banned: (none)  exclude: cnr"
/// );
/// ```
#[must_use]
pub fn format_constraints(constraints: &Constraints, word_length: usize) -> String {
    format!(
        "fixed: {}  mins: {}  banned: {}  exclude: {}",
        format_fixed(constraints, word_length),
        format_min_counts(constraints),
        format_banned(constraints),
        format_excluded(constraints)
    )
}

/// Format feedback as an emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &RoundFeedback, word_length: usize) -> String {
    (0..word_length)
        .map(|i| {
            if feedback.fixed.contains_key(&i) {
                '🟩'
            } else if feedback.present.iter().any(|&(_, pos)| pos == i) {
                '🟨'
            } else {
                '⬜'
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
