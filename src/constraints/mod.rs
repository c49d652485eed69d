//! Constraint accumulation and candidate filtering
//!
//! `Constraints` is a plain value: each accepted round either mutates one in place
//! (`apply_round`) or produces the next value (`with_round`).

mod filter;
mod state;

pub use filter::{filter_candidates, is_consistent};
pub use state::{BannedPositions, Constraints, ExcludedLetters, FixedConflict, MinimumCounts};
