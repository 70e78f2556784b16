//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStats;
use crate::cli::args::{CoursefindArgs, OutputFormat};
use crate::error::Result;
use crate::search::SearchResult;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutput {
    pub query: String,
    pub total_hits: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResult>,
}

/// Result structure for suggestion operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestOutput {
    pub query: String,
    pub suggestions: Vec<String>,
}

/// Result structure for catalog statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOutput {
    pub catalog: String,
    pub stats: CatalogStats,
}

/// Print search results in the selected format.
pub fn print_search(output: &SearchOutput, args: &CoursefindArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(output, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "{} result(s) for '{}' ({} ms)",
                    output.total_hits, output.query, output.duration_ms
                );
                println!();
            }

            for (rank, result) in output.results.iter().enumerate() {
                println!(
                    "{:>3}. [{}] {} ({} {})  score={}",
                    rank + 1,
                    result.kind,
                    result.title,
                    result.course_code,
                    result.course_name,
                    result.score
                );
                if args.verbosity() > 1 && !result.highlighted_text.is_empty() {
                    println!("     {}", result.highlighted_text);
                }
            }

            Ok(())
        }
    }
}

/// Print suggestions in the selected format.
pub fn print_suggestions(output: &SuggestOutput, args: &CoursefindArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(output, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "{} suggestion(s) for '{}'",
                    output.suggestions.len(),
                    output.query
                );
                println!();
            }

            for suggestion in &output.suggestions {
                println!("{suggestion}");
            }

            Ok(())
        }
    }
}

/// Print catalog statistics in the selected format.
pub fn print_stats(output: &StatsOutput, args: &CoursefindArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => print_json(output, args),
        OutputFormat::Human => {
            println!("Catalog: {}", output.catalog);
            println!("  Courses:     {}", output.stats.courses);
            println!("  Units:       {}", output.stats.units);
            println!("  Experiments: {}", output.stats.experiments);
            println!("  Topics:      {}", output.stats.topics);
            println!("  References:  {}", output.stats.references);
            println!("  Outcomes:    {}", output.stats.outcomes);
            Ok(())
        }
    }
}

/// Print any serializable value as JSON.
fn print_json<T: Serialize>(value: &T, args: &CoursefindArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
