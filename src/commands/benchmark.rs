//! Benchmark command
//!
//! Self-plays many random targets to measure how quickly the helper narrows
//! down the answer.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::wordlists::words_of_length;
use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of random targets
    pub count: usize,
    /// Word length to sample targets from
    pub length: usize,
    /// Seed for reproducible target selection
    pub seed: Option<u64>,
    pub first_guess: Option<String>,
    pub max_guesses: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            length: 5,
            seed: None,
            first_guess: None,
            max_guesses: 6,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` distinct random targets
#[must_use]
pub fn pick_targets(pool: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    pool.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run the benchmark
///
/// Games are independent and run in parallel.
///
/// # Errors
///
/// Returns an error if no dictionary word has the requested length, or if a
/// game cannot be played (for example an invalid forced first guess).
pub fn run_benchmark(
    dictionary: &[String],
    config: &BenchmarkConfig,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pool = words_of_length(dictionary, config.length);
    ensure!(
        !pool.is_empty(),
        "no {}-letter words in the word list",
        config.length
    );

    let targets = pick_targets(&pool, config.count, config.seed);
    info!(
        "benchmarking {} targets out of {} words",
        targets.len(),
        pool.len()
    );

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results = targets
        .par_iter()
        .map(|target| {
            let config = SolveConfig {
                target: target.text().to_string(),
                first_guess: config.first_guess.clone(),
                max_guesses: config.max_guesses,
            };
            let result = solve_word(&config, dictionary);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for result in results.iter().filter(|r| r.success) {
        *distribution.entry(result.guesses.len()).or_insert(0) += 1;
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(&n, &count)| n * count).sum();
    let total_words = results.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        [
            "crane", "slate", "speed", "erase", "robot", "floor", "eerie", "geese", "llama",
            "react", "trace", "cater", "ox",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn config(count: usize, max_guesses: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            seed: Some(7),
            max_guesses,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn seeded_targets_are_reproducible() {
        let pool = words_of_length(&dictionary(), 5);
        let first = pick_targets(&pool, 5, Some(42));
        let second = pick_targets(&pool, 5, Some(42));

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn targets_capped_at_pool_size() {
        let pool = words_of_length(&dictionary(), 5);
        assert_eq!(pick_targets(&pool, 100, Some(1)).len(), pool.len());
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&dictionary(), &config(5, 6), false).unwrap();

        assert_eq!(result.total_words, 5);
        assert_eq!(result.solved + result.failed, 5);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run_benchmark(&dictionary(), &config(12, 12), false).unwrap();

        // With as many guesses as words every game is solved
        assert_eq!(result.solved, 12);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let mut config = config(3, 12);
        config.first_guess = Some("eerie".to_string());

        let result = run_benchmark(&dictionary(), &config, false).unwrap();
        assert_eq!(result.total_words, 3);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_no_words_of_length_is_error() {
        let mut config = config(3, 6);
        config.length = 9;
        assert!(run_benchmark(&dictionary(), &config, false).is_err());
    }

    #[test]
    fn benchmark_bad_first_word_is_error() {
        let mut config = config(3, 6);
        config.first_guess = Some("toolong".to_string());
        assert!(run_benchmark(&dictionary(), &config, false).is_err());
    }
}
