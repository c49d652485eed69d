//! Interactive helper loop
//!
//! Line-based prompts for the guess, the fixed-letter pattern, and the misplaced
//! letters. A bad answer rejects the round and starts over at the guess prompt.
//! Commands other than quitting carry a `:` prefix so no guess is mistaken for one.

use crate::core::parse_fixed_pattern;
use crate::output::write_round_report;
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the interactive loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_play(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive loop on any input and output
///
/// Ends on a quit command or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    print_banner(out, session)?;

    loop {
        let Some(line) = prompt(input, out, "\nGuess (or 'q' to quit)")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" | ":q" | ":quit" => break,
            ":help" | ":h" | "?" => {
                print_help(out)?;
                continue;
            }
            ":undo" | ":u" => {
                match session.undo() {
                    Some(round) => {
                        writeln!(out, "✓ Undid '{}'", round.guess)?;
                        write_round_report(out, &session.report())?;
                    }
                    None => writeln!(out, "Nothing to undo!")?,
                }
                continue;
            }
            ":reset" | ":new" => {
                session.reset();
                writeln!(out, "🔄 All rounds cleared")?;
                continue;
            }
            _ => {}
        }

        let guess = match session.check_guess(&line) {
            Ok(guess) => guess,
            Err(e) => {
                writeln!(out, "{}", e.to_string().red())?;
                continue;
            }
        };
        let length = session.expected_length(&guess);

        let Some(fixed) = prompt(
            input,
            out,
            &format!("Fixed letters with '.' for unknowns ({length} chars), e.g. '.r..e'"),
        )?
        else {
            break;
        };
        if let Err(e) = parse_fixed_pattern(&fixed, length) {
            writeln!(out, "{}", e.to_string().red())?;
            continue;
        }

        let Some(present) = prompt(
            input,
            out,
            "Misplaced letters as 'letter@pos' 1-based, space or comma separated (blank if none)",
        )?
        else {
            break;
        };

        match session.submit_round(guess.text(), &fixed, &present) {
            Ok(report) => write_round_report(out, &report)?,
            Err(e) => writeln!(out, "{}", e.to_string().red())?,
        }
    }

    writeln!(out, "\n👋 Good luck!")?;
    Ok(())
}

fn print_banner<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        "Wordle Helper - Interactive Mode".bright_cyan().bold()
    )?;
    writeln!(
        out,
        "Loaded {} words. Enter each guess and its feedback; ':help' lists commands.",
        session.dictionary_len()
    )
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nFor each round enter:")?;
    writeln!(out, "  1. the guess, e.g. crane")?;
    writeln!(out, "  2. fixed (green) letters with '.' or '_' for unknowns, e.g. .r..e")?;
    writeln!(out, "  3. misplaced (yellow) letters as letter@pos, e.g. a@3 n@5")?;
    writeln!(out, "Letters of the guess marked neither way count as absent (grey).")?;
    writeln!(
        out,
        "Commands: ':undo' drops the last round, ':reset' clears all rounds, 'q' quits"
    )
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
