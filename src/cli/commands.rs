//! Command implementations for the coursefind CLI.

use std::time::Instant;

use crate::catalog::{CatalogStats, load_catalog};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::search::{SearchConfig, SearchService};

/// Execute a CLI command.
pub fn execute_command(args: CoursefindArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => run_search(search_args.clone(), &args),
        Command::Suggest(suggest_args) => run_suggest(suggest_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Search a catalog.
fn run_search(args: SearchArgs, cli_args: &CoursefindArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading catalog from: {}", args.catalog.display());
    }

    let courses = load_catalog(&args.catalog)?;

    let mut config = SearchConfig::new();
    if let Some(limit) = args.limit {
        config = config.max_results(limit);
    }
    let service = SearchService::with_config(courses, config);

    let start_time = Instant::now();
    let results = service.search(&args.query)?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    print_search(
        &SearchOutput {
            query: args.query,
            total_hits: results.len(),
            duration_ms,
            results,
        },
        cli_args,
    )
}

/// Show autocomplete suggestions.
fn run_suggest(args: SuggestArgs, cli_args: &CoursefindArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading catalog from: {}", args.catalog.display());
    }

    let courses = load_catalog(&args.catalog)?;
    let service = SearchService::new(courses);

    let suggestions = service.quick_suggestions(&args.query);

    print_suggestions(
        &SuggestOutput {
            query: args.query,
            suggestions,
        },
        cli_args,
    )
}

/// Show catalog statistics.
fn show_stats(args: StatsArgs, cli_args: &CoursefindArgs) -> Result<()> {
    let courses = load_catalog(&args.catalog)?;
    let stats = CatalogStats::collect(&courses);

    print_stats(
        &StatsOutput {
            catalog: args.catalog.to_string_lossy().to_string(),
            stats,
        },
        cli_args,
    )
}
