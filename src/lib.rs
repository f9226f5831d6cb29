//! Core library for the `ollama-total` CLI.
//!
//! Everything the binary does lives here: running `ollama list`, extracting
//! the size column from each listing row, summing the sizes in bytes, and
//! rendering the total. The parsing core ([`calculator::total_from_listing`])
//! is a pure function of the captured text, which keeps the subprocess
//! boundary out of the tests.

pub mod calculator;
pub mod output;
pub mod utils;

pub use calculator::{ModelSize, TotalReport, compute_total, total_from_listing};
