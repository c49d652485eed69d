//! Terminal output formatting
//!
//! Display utilities for round reports and command results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result, write_round_report};
