//! Total storage calculation for installed Ollama models.
//!
//! This module is the core of the tool: it runs `ollama list`, extracts the
//! size field from every listing row, converts each size to bytes with
//! decimal multipliers, and accumulates the results into a single total.
//!
//! Parsing is deliberately lenient: rows without a recognizable size field
//! (or with an unparseable number) are skipped rather than treated as
//! errors, so an unexpected row degrades the total instead of aborting the
//! whole computation.

use std::process::Command;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::utils::{decimal_multiplier, format_total};

/// Matches the first size field in a listing row, e.g. `2.7 GB` or `800 MB`.
static SIZE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?) (MB|GB|TB)").expect("size pattern is valid"));

/// A single model row extracted from the listing output.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSize {
    /// Model name, taken as the first whitespace-separated token of the row.
    pub name: String,

    /// Size converted to bytes using decimal multipliers.
    pub bytes: f64,
}

/// The outcome of one total computation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TotalReport {
    /// Per-model sizes, in listing order. Rows that carried no recognizable
    /// size field do not appear here.
    pub models: Vec<ModelSize>,

    /// Sum of all matched sizes, in bytes.
    pub total_bytes: f64,
}

impl TotalReport {
    /// Render the total in the largest unit for which the value is at least 1.
    ///
    /// An empty report renders as `0 B`.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_total(self.total_bytes)
    }
}

/// Run `ollama list` and sum the sizes of all listed models.
///
/// The child process runs to completion before any parsing begins; its
/// captured stdout is handed to [`total_from_listing`]. Only stdout is
/// consumed, and the command is spawned with the inherited environment.
///
/// # Errors
///
/// Returns an error (message prefixed `failed to execute 'ollama list'`)
/// when the command cannot be launched or exits with a failure status.
pub fn compute_total() -> Result<TotalReport> {
    let output = Command::new("ollama")
        .arg("list")
        .output()
        .context("failed to execute 'ollama list'")?;

    if !output.status.success() {
        bail!("failed to execute 'ollama list': {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(total_from_listing(&stdout))
}

/// Sum every size field in a captured listing.
///
/// The first line of the trimmed text is treated as the column header and
/// skipped; a listing with zero or one lines yields an empty report. Each
/// remaining line contributes at most one size: the first
/// `<number> <MB|GB|TB>` match on that line. Lines without a match, or whose
/// matched number fails to parse, contribute nothing.
#[must_use]
pub fn total_from_listing(listing: &str) -> TotalReport {
    let lines: Vec<&str> = listing.trim().lines().collect();

    let mut report = TotalReport::default();

    if lines.len() <= 1 {
        return report;
    }

    for line in &lines[1..] {
        let Some(caps) = SIZE_PATTERN.captures(line) else {
            continue;
        };
        let Ok(value) = caps[1].parse::<f64>() else {
            continue;
        };
        let Some(multiplier) = decimal_multiplier(&caps[2]) else {
            continue;
        };

        let name = line.split_whitespace().next().unwrap_or_default();

        report.total_bytes += value * multiplier;
        report.models.push(ModelSize {
            name: name.to_string(),
            bytes: value * multiplier,
        });
    }

    report
}
