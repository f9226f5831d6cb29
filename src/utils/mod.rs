//! Utility functions and helpers.
//!
//! This module contains the size conversion and formatting helpers used by
//! the total calculator and the output layers.

pub mod size;

pub use size::{decimal_multiplier, format_total};
