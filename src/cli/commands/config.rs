//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchMode;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub data_dir: String,
    pub index_file: String,
    pub results_file: String,
    pub indexing: IndexingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Serialize)]
pub struct IndexingConfig {
    pub default_root: String,
    pub exclude_patterns: Vec<String>,
    pub follow_links: bool,
}

#[derive(Debug, Serialize)]
pub struct SearchConfig {
    pub default_mode: SearchMode,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let response = ConfigResponse {
        data_dir: config.storage.data_dir.to_string_lossy().into_owned(),
        index_file: config.index_path().to_string_lossy().into_owned(),
        results_file: config.results_path().to_string_lossy().into_owned(),
        indexing: IndexingConfig {
            default_root: config
                .indexing
                .default_root
                .to_string_lossy()
                .into_owned(),
            exclude_patterns: config.indexing.exclude_patterns.clone(),
            follow_links: config.indexing.follow_links,
        },
        search: SearchConfig {
            default_mode: config.search.default_mode,
        },
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir: {}", response.data_dir);
            println!("  index_file: {}", response.index_file);
            println!("  results_file: {}", response.results_file);
            println!("  indexing:");
            println!("    default_root: {}", response.indexing.default_root);
            println!(
                "    exclude_patterns: {:?}",
                response.indexing.exclude_patterns
            );
            println!("    follow_links: {}", response.indexing.follow_links);
            println!("  search:");
            println!("    default_mode: {}", response.search.default_mode);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
