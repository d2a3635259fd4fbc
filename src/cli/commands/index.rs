//! Index command - build a new index of a directory

use crate::cli::output::{colors, format_count_colored, format_duration, print_warning};
use crate::cli::OutputFormat;
use crate::core::indexer::Indexer;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the index command
#[derive(Args, Debug, Default)]
pub struct IndexArgs {
    /// Directory to index (defaults to indexing.default_root)
    pub path: Option<PathBuf>,

    /// Glob patterns to exclude (can be specified multiple times)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,
}

/// Indexing result response
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub root: String,
    pub index_file: String,
    pub directories: usize,
    pub files: usize,
    pub duration_secs: f64,
}

/// Execute the index command
pub fn execute(
    args: IndexArgs,
    services: &mut Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = args
        .path
        .unwrap_or_else(|| services.config.indexing.default_root.clone());

    // The walk itself tolerates a bad root; just say so up front
    if !root.is_dir() && format == OutputFormat::Human {
        print_warning(&format!(
            "'{}' is not a readable directory; the index will be empty.",
            root.display()
        ));
    }

    let exclude_patterns = if args.exclude.is_empty() {
        services.config.indexing.exclude_patterns.clone()
    } else {
        args.exclude
    };
    let follow_links = args.follow_links || services.config.indexing.follow_links;
    let indexer = Indexer::new(exclude_patterns, follow_links)?;

    let start = Instant::now();
    let index = services.rebuild_index_with(&indexer, &root)?;
    let (directories, files) = (index.directory_count(), index.file_count());
    let duration_secs = start.elapsed().as_secs_f64();

    let response = IndexResponse {
        root: root.to_string_lossy().into_owned(),
        index_file: services.store.path().to_string_lossy().into_owned(),
        directories,
        files,
        duration_secs,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} files in {} directories in {}",
                colors::success("Indexed"),
                format_count_colored(response.files),
                format_count_colored(response.directories),
                colors::number(&format_duration(response.duration_secs))
            );
            println!(
                "Index: {}",
                colors::file_path(&response.index_file)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
