//! Word list loading utilities
//!
//! Entries are kept as raw lowercase strings; they only become `Word`s once a
//! session knows which length is in play.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Word list used when no path is given
pub const DEFAULT_WORDLIST: &str = "valid-wordle-words.txt";

/// Load a dictionary file
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::load_from_file;
///
/// let words = load_from_file("valid-wordle-words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Split word list text into trimmed, lowercased, non-blank entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Keep the entries of the given length that are valid words, in order
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::words_of_length;
///
/// let entries = vec!["crane".to_string(), "ox".to_string(), "sl4te".to_string()];
/// let words = words_of_length(&entries, 5);
/// assert_eq!(words.len(), 1);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn words_of_length(entries: &[String], length: usize) -> Vec<Word> {
    let words: Vec<Word> = entries
        .iter()
        .filter(|entry| entry.chars().count() == length)
        .filter_map(|entry| Word::new(entry).ok())
        .collect();
    debug!(
        "{} of {} entries are {length}-letter words",
        words.len(),
        entries.len()
    );
    words
}
