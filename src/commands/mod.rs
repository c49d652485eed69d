//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{run_play, run_play_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
