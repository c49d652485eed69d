//! Wordle Helper - CLI
//!
//! Interactive helper that narrows a word list from game feedback, plus
//! self-play modes for checking how well the ranking works.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordle_helper::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, run_play, solve_word},
    output::{print_benchmark_result, print_solve_result},
    ranking::DEFAULT_TOP,
    session::Session,
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Interactive Wordle helper: narrows a word list from green/yellow/grey feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line)
    #[arg(short = 'w', long = "file", global = true, default_value = DEFAULT_WORDLIST)]
    file: PathBuf,

    /// Number of ranked candidates to show per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_TOP)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive helper loop (default)
    Play,

    /// Self-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Force the first guess
        #[arg(short, long)]
        first: Option<String>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 6)]
        max_guesses: usize,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play many random targets and report statistics
    Benchmark {
        /// Number of random target words
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Word length to sample targets from
        #[arg(short, long, default_value_t = 5)]
        length: usize,

        /// Seed for reproducible target selection
        #[arg(long)]
        seed: Option<u64>,

        /// Force the first guess of every game
        #[arg(short, long)]
        first: Option<String>,

        /// Give up after this many guesses
        #[arg(short, long, default_value_t = 6)]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_from_file(&cli.file)
        .with_context(|| format!("failed to read word list {}", cli.file.display()))?;
    info!(
        "loaded {} words from {}",
        dictionary.len(),
        cli.file.display()
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = Session::new(&dictionary).with_top(cli.top);
            run_play(&mut session)
        }
        Commands::Solve {
            word,
            first,
            max_guesses,
            verbose,
        } => {
            let config = SolveConfig {
                target: word,
                first_guess: first,
                max_guesses,
            };
            let result = solve_word(&config, &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
            first,
            max_guesses,
        } => {
            println!("Running benchmark on {count} random {length}-letter words...");
            let config = BenchmarkConfig {
                count,
                length,
                seed,
                first_guess: first,
                max_guesses,
            };
            let result = run_benchmark(&dictionary, &config, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
