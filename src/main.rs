//! # ollama-total
//!
//! A tiny CLI tool that reports the total disk space used by locally
//! installed [Ollama](https://ollama.com) models.
//!
//! It shells out to `ollama list`, extracts the size column from each row,
//! sums the sizes using decimal (1000-based) multipliers, and prints the
//! total in the largest fitting unit.
//!
//! ## Usage
//!
//! ```bash
//! # Just the total
//! ollama-total
//!
//! # Per-model breakdown before the total
//! ollama-total --verbose
//!
//! # Machine-readable output
//! ollama-total --json
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use ollama_total::calculator::{TotalReport, compute_total};
use ollama_total::output::JsonOutput;
use ollama_total::utils::format_total;
use std::process::exit;

/// Entry point for the ollama-total application.
///
/// Errors from [`inner_main`] are printed to stdout as `Error: <message>`
/// before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        println!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Computes the total once and renders it in the requested format.
///
/// # Errors
///
/// Returns errors from the `ollama list` invocation or from JSON
/// serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let report = compute_total()?;

    if args.json() {
        let output = JsonOutput::from_report(&report);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.verbose() {
        print_breakdown(&report);
    }

    println!("{}", report.formatted_total());
    Ok(())
}

// ── Helper functions ────────────────────────────────────────────────────

/// Print one line per matched model, in listing order.
fn print_breakdown(report: &TotalReport) {
    if report.models.is_empty() {
        println!("{}", "✨ No models found!".yellow());
        return;
    }

    println!("{}", "📦 Installed models:".bold());
    for model in &report.models {
        println!(
            "  {:<40} {}",
            model.name,
            format!("{:>10}", format_total(model.bytes)).bright_white()
        );
    }
    println!();
}
