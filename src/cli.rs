//! Command-line interface definition and argument parsing.
//!
//! This module defines the (small) command-line surface using the
//! [clap](https://docs.rs/clap/) library. The default invocation takes no
//! arguments and prints only the total; the flags below add optional detail
//! or switch to machine-readable output.

use clap::Parser;

/// Report the total disk space used by locally installed Ollama models.
#[derive(Parser, Debug)]
#[command(name = "ollama-total", version, about, long_about = None)]
pub struct Cli {
    /// Print a per-model breakdown before the total
    ///
    /// Each listing row that carries a recognizable size field is shown with
    /// its model name and converted size, in listing order.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Output results as JSON
    ///
    /// Replaces all human-readable output with a single JSON object holding
    /// the byte total and a per-model breakdown. Useful for scripting.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Whether JSON output mode is active.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Whether the per-model breakdown was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["ollama-total"]);

        assert!(!args.json());
        assert!(!args.verbose());
    }

    #[test]
    fn test_json_flag() {
        let args = Cli::parse_from(["ollama-total", "--json"]);

        assert!(args.json());
        assert!(!args.verbose());
    }

    #[test]
    fn test_verbose_flags() {
        let long = Cli::parse_from(["ollama-total", "--verbose"]);
        assert!(long.verbose());

        let short = Cli::parse_from(["ollama-total", "-v"]);
        assert!(short.verbose());
    }

    #[test]
    fn test_flags_combine() {
        let args = Cli::parse_from(["ollama-total", "--json", "-v"]);

        assert!(args.json());
        assert!(args.verbose());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["ollama-total", "list"]).is_err());
    }
}
