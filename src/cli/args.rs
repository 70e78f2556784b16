//! Command line argument parsing for the coursefind CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Coursefind - relevance search over a course catalog
#[derive(Parser, Debug, Clone)]
#[command(name = "coursefind")]
#[command(about = "Relevance search and autocomplete over a university course catalog")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CoursefindArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl CoursefindArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search a course catalog
    Search(SearchArgs),

    /// Show autocomplete suggestions for a partial query
    Suggest(SuggestArgs),

    /// Show catalog statistics
    Stats(StatsArgs),
}

/// Arguments for searching a catalog
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Free-text search query
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for autocomplete suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Partial query text
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for catalog statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the catalog JSON file
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = CoursefindArgs::parse_from(["coursefind", "stats", "catalog.json"]);
        assert_eq!(args.verbosity(), 1);

        let args = CoursefindArgs::parse_from(["coursefind", "-v", "stats", "catalog.json"]);
        assert_eq!(args.verbosity(), 1);

        let args = CoursefindArgs::parse_from(["coursefind", "-vv", "stats", "catalog.json"]);
        assert_eq!(args.verbosity(), 2);

        let args = CoursefindArgs::parse_from(["coursefind", "--quiet", "stats", "catalog.json"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_search_args_parse() {
        let args = CoursefindArgs::parse_from([
            "coursefind",
            "search",
            "catalog.json",
            "binary search",
            "--limit",
            "5",
        ]);

        match args.command {
            Command::Search(search) => {
                assert_eq!(search.query, "binary search");
                assert_eq!(search.limit, Some(5));
            }
            _ => panic!("Expected search command"),
        }
    }
}
