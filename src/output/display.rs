//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, format_constraints};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::session::RoundReport;
use colored::Colorize;
use std::io::{self, Write};

/// Write the per-round summary: remaining count, ranked words, constraints
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_report<W: Write>(out: &mut W, report: &RoundReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("Candidates: {}", report.remaining).bright_cyan().bold()
    )?;

    if report.is_empty() {
        writeln!(
            out,
            "{}",
            "No matches. Recheck inputs (':undo' drops the last round).".red()
        )?;
        return Ok(());
    }

    for scored in &report.ranked {
        writeln!(out, "{}\t{:.3}", scored.word, scored.score)?;
    }

    writeln!(
        out,
        "\n{} {}",
        "Constraints:".bright_black(),
        format_constraints(&report.constraints, report.word_length)
    )
}

/// Print the result of a self-played game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let length = result.target.len();
    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Coverage:   {score:.3}");
            }
            println!(
                "  Remaining:  [{}]",
                create_progress_bar(
                    step.candidates_after as f64,
                    step.candidates_before as f64,
                    30
                )
                .green()
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed).red()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {guess_count}: {} {count:4} ({pct:5.1}%)",
            bar.green()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn render(report: &RoundReport) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_round_report(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn round_report_lists_candidates_and_constraints() {
        let dictionary: Vec<String> = ["crane", "crate", "slate", "plate"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut session = Session::new(&dictionary);
        let report = session.submit_round("crane", "..a.e", "").unwrap();

        let text = render(&report);
        assert!(text.contains("Candidates: 2"));
        assert!(text.contains("slate\t"));
        assert!(text.contains("plate\t"));
        assert!(text.contains("exclude: cnr"));
    }

    #[test]
    fn empty_report_says_no_matches() {
        let dictionary = vec!["crane".to_string()];
        let mut session = Session::new(&dictionary);
        let report = session.submit_round("zzzzz", "zzzzz", "").unwrap();

        let text = render(&report);
        assert!(text.contains("Candidates: 0"));
        assert!(text.contains("No matches"));
    }
}
