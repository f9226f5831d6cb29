//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, the computed total is serialized to
//! stdout as a single JSON object, replacing all human-readable output.
//! Sizes appear both as raw byte counts and as formatted strings so that
//! consumers can pick whichever form suits them.

use serde::Serialize;

use crate::calculator::TotalReport;
use crate::utils::format_total;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Total size of all matched models, in bytes.
    pub total_bytes: f64,

    /// Human-readable formatted total (e.g. `"3.5 GB"`).
    pub total_formatted: String,

    /// Number of models that contributed to the total.
    pub model_count: usize,

    /// Per-model breakdown, in listing order.
    pub models: Vec<JsonModelEntry>,
}

/// A single model entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonModelEntry {
    /// Model name extracted from the listing row.
    pub name: String,

    /// Model size in bytes.
    pub size_bytes: f64,

    /// Human-readable formatted size (e.g. `"800.0 MB"`).
    pub size_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a computed total report.
    #[must_use]
    pub fn from_report(report: &TotalReport) -> Self {
        Self {
            total_bytes: report.total_bytes,
            total_formatted: report.formatted_total(),
            model_count: report.models.len(),
            models: report
                .models
                .iter()
                .map(|model| JsonModelEntry {
                    name: model.name.clone(),
                    size_bytes: model.bytes,
                    size_formatted: format_total(model.bytes),
                })
                .collect(),
        }
    }
}
