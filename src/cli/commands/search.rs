//! Search command - search indexed file names

use crate::cli::output::{colors, print_header, summary_line};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{SearchMode, SearchQuery};
use clap::Args;
use serde::Serialize;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in file names (case-sensitive)
    pub term: String,

    /// Match rule (defaults to search.default_mode)
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<SearchMode>,

    /// Only print matching paths (no header or summary)
    #[arg(long)]
    pub paths_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub term: String,
    pub mode: SearchMode,
    pub matches: usize,
    pub records: usize,
    pub results_file: String,
    pub results: Vec<String>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = args.mode.unwrap_or(services.config.search.default_mode);
    let query = SearchQuery::new(args.term, mode);

    let outcome = services.search(&query)?;

    // Empty term: the diagnostic has already been shown, nothing ran
    if query.term.is_empty() && format == OutputFormat::Human {
        return Ok(());
    }

    let output = SearchResponseOutput {
        term: query.term,
        mode,
        matches: outcome.matches,
        records: outcome.records,
        results_file: services
            .searcher
            .results_path()
            .to_string_lossy()
            .into_owned(),
        results: outcome.paths,
    };

    match format {
        OutputFormat::Human if args.paths_only => {
            for path in &output.results {
                println!("{path}");
            }
        }
        OutputFormat::Human => {
            println!();
            print_header(">> This query produced the following matches:");
            println!();
            for path in &output.results {
                println!("{}", colors::file_path(path));
            }
            println!();
            println!(">> {}", summary_line(output.matches, output.records));
            println!(
                "{}",
                colors::dim(&format!("Results saved to {}", output.results_file))
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
