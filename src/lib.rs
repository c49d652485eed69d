//! Wordle Helper
//!
//! Narrows a dictionary from green/yellow/grey feedback and ranks what is left by
//! how rare each candidate's letters are among the remaining words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::session::Session;
//!
//! let dictionary: Vec<String> = ["crane", "crate", "slate", "plate"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let mut session = Session::new(&dictionary);
//!
//! // Guessed CRANE: A and E green, nothing yellow
//! let report = session.submit_round("crane", "..a.e", "").unwrap();
//! assert_eq!(report.remaining, 2);
//! ```

// Core domain types
pub mod core;

// Constraint accumulation and filtering
pub mod constraints;

// Candidate ranking
pub mod ranking;

// Per-run session state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
