//! Core domain types for the helper
//!
//! Words and per-round feedback, with no knowledge of sessions or dictionaries.

mod feedback;
mod word;

pub use feedback::{
    FixedLetters, FormatError, PLACEHOLDERS, PresentLetters, RoundFeedback, parse_fixed_pattern,
    parse_present_misplaced,
};
pub use word::{Word, WordError};
