//! Size conversion and formatting utilities.
//!
//! This module provides the decimal (1000-based) unit multipliers used to
//! convert listing sizes into bytes, and the formatter that renders an
//! accumulated byte total back into the largest fitting unit.

/// One megabyte in bytes (decimal, SI-style).
pub const MB: f64 = 1_000_000.0;

/// One gigabyte in bytes (decimal, SI-style).
pub const GB: f64 = 1_000_000_000.0;

/// One terabyte in bytes (decimal, SI-style).
pub const TB: f64 = 1_000_000_000_000.0;

/// Return the decimal multiplier for a size unit token.
///
/// Only the three units that appear in `ollama list` output are recognized;
/// anything else yields `None` so the caller can skip the value rather than
/// accumulate it with a bogus scale.
///
/// # Examples
///
/// ```
/// # use ollama_total::utils::decimal_multiplier;
/// assert_eq!(decimal_multiplier("GB"), Some(1_000_000_000.0));
/// assert_eq!(decimal_multiplier("KiB"), None);
/// ```
#[must_use]
pub fn decimal_multiplier(unit: &str) -> Option<f64> {
    match unit {
        "MB" => Some(MB),
        "GB" => Some(GB),
        "TB" => Some(TB),
        _ => None,
    }
}

/// Format a byte total using the largest unit for which the value is at
/// least 1, with one fractional digit.
///
/// Totals below 1 MB fall back to whole bytes. Thresholds are decimal, so
/// exactly 1,000,000 bytes renders as `1.0 MB` while 999,999 bytes renders
/// as `999999 B`.
///
/// # Examples
///
/// ```
/// # use ollama_total::utils::format_total;
/// assert_eq!(format_total(3_500_000_000.0), "3.5 GB");
/// assert_eq!(format_total(0.0), "0 B");
/// ```
#[must_use]
pub fn format_total(total_bytes: f64) -> String {
    if total_bytes >= TB {
        format!("{:.1} TB", total_bytes / TB)
    } else if total_bytes >= GB {
        format!("{:.1} GB", total_bytes / GB)
    } else if total_bytes >= MB {
        format!("{:.1} MB", total_bytes / MB)
    } else {
        format!("{total_bytes:.0} B")
    }
}
