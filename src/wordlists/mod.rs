//! Dictionary loading
//!
//! The dictionary is a plain text file with one word per line.

pub mod loader;

pub use loader::{DEFAULT_WORDLIST, load_from_file, parse_word_list, words_of_length};
