//! Info command - show where the index lives and what it holds

use crate::cli::output::{colors, format_count, format_relative_time};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

/// Arguments for the info command
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    /// Also list every indexed directory
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Index information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub index_file: String,
    pub index_exists: bool,
    pub results_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_at: Option<DateTime<Utc>>,
    pub directories: usize,
    pub files: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory_list: Option<Vec<String>>,
}

/// Execute the info command
pub fn execute(
    args: InfoArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let index = services.index();

    let info = InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        index_file: services.store.path().to_string_lossy().into_owned(),
        index_exists: services.store.exists(),
        results_file: services
            .searcher
            .results_path()
            .to_string_lossy()
            .into_owned(),
        root: index.root.clone(),
        built_at: index.built_at,
        directories: index.directory_count(),
        files: index.file_count(),
        directory_list: args.detailed.then(|| {
            index
                .entries
                .iter()
                .map(|e| e.directory_path.clone())
                .collect()
        }),
    };

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Index: {}", colors::file_path(&info.index_file));
            println!("Results: {}", colors::file_path(&info.results_file));
            if !info.index_exists {
                println!("{}", colors::dim("No index built yet."));
                return Ok(());
            }
            if let Some(root) = &info.root {
                println!("Root: {}", colors::file_path(root));
            }
            if let Some(built_at) = &info.built_at {
                println!(
                    "Built: {} {}",
                    built_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    colors::dim(&format!("({})", format_relative_time(built_at)))
                );
            }
            println!(
                "Contents: {} files in {} directories",
                colors::number(&format_count(info.files)),
                colors::number(&format_count(info.directories))
            );
            if let Some(list) = &info.directory_list {
                for dir in list {
                    println!("  {}", colors::file_path(dir));
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
