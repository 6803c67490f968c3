//! Console reporting for the CLI.
//!
//! Kept apart from the library so itinerary can be used without printing
//! side effects. Console colors follow `colored` (and so `NO_COLOR`); they
//! are unrelated to the colors written into the prettified document.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::error::PrettifyError;
use crate::job::JobOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const USAGE: &str =
    "itinerary usage:\n$ itinerary ./input.txt ./output.txt ./airport-lookup.csv";

/// Print the short usage line shown when paths are missing.
pub fn print_usage() {
    print_usage_to(&mut io::stderr().lock());
}

pub fn print_usage_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", USAGE.red());
    let _ = writeln!(writer, "Run with {} for the markup reference.", "--help".cyan());
}

/// Print the outcome of a successful run.
pub fn print_outcome(outcome: &JobOutcome, output: &Path, verbose: bool) {
    print_outcome_to(outcome, output, verbose, &mut io::stderr().lock());
}

pub fn print_outcome_to<W: Write>(
    outcome: &JobOutcome,
    output: &Path,
    verbose: bool,
    writer: &mut W,
) {
    let stats = &outcome.rewrite.stats;

    if verbose {
        let _ = writeln!(
            writer,
            "Loaded {} airport {}",
            outcome.airports,
            if outcome.airports == 1 { "row" } else { "rows" }
        );
        for pass in &stats.passes {
            if pass.resolved == 0 && pass.passed_through == 0 {
                continue;
            }
            let _ = writeln!(
                writer,
                "  {:<14} {} resolved, {} left as written",
                pass.kind.to_string().cyan(),
                pass.resolved,
                pass.passed_through
            );
        }
    }

    let resolved = stats.resolved();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} {})",
            output.display(),
            resolved,
            if resolved == 1 {
                "substitution"
            } else {
                "substitutions"
            }
        )
        .green()
    );

    let passed_through = stats.passed_through();
    if passed_through > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} token(s) could not be resolved and were left as written (use {} for details)",
            "warning:".bold().yellow(),
            passed_through,
            "-v".cyan()
        );
    }
}

/// Print a fatal error. Verbose mode adds the underlying causes.
pub fn print_error(err: &anyhow::Error, verbose: bool) {
    print_error_to(err, verbose, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, verbose: bool, writer: &mut W) {
    // Fatal run errors keep their short, fixed wording.
    let message = match err.downcast_ref::<PrettifyError>() {
        Some(PrettifyError::Io { .. }) | None => format!("Error: {}", err),
        Some(fatal) => fatal.to_string(),
    };
    let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());

    if verbose {
        for cause in err.chain().skip(1) {
            let _ = writeln!(writer, "  {} {}", "caused by:".bold(), cause);
        }
        if let Some(path) = err.downcast_ref::<PrettifyError>().and_then(missing_path) {
            let _ = writeln!(writer, "  {} {}", "path:".bold(), path.display());
        }
    }
}

fn missing_path(err: &PrettifyError) -> Option<&Path> {
    match err {
        PrettifyError::InputNotFound(path) | PrettifyError::LookupNotFound(path) => {
            Some(path.as_path())
        }
        PrettifyError::MalformedLookup(_) | PrettifyError::Io { .. } => None,
    }
}
