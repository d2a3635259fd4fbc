//! CLI adapter for filedex
//!
//! Plays the host role around `core/`: it turns command-line requests into
//! index and search calls, renders outcomes, and shows core diagnostics.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filedex - search file names in a cached directory listing
///
/// Upon first use:
///   1. Choose a directory and run `filedex index <PATH>`
///   2. Wait for indexing to finish
///   3. Search with `filedex search <TERM>`
///
/// Matching paths are also written to search_results.txt in the data
/// directory. Run `filedex info` to see where that is.
#[derive(Parser, Debug)]
#[command(name = "filedex")]
#[command(version)]
#[command(about = "Search file names in a cached directory listing")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Directory holding the index and results files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Don't print status messages
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a new index of a directory, replacing the old one
    Index(commands::IndexArgs),

    /// Search indexed file names
    Search(commands::SearchArgs),

    /// Show where the index lives and what it holds
    Info(commands::InfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  filedex completions bash > ~/.local/share/bash-completion/completions/filedex
    ///   zsh:   filedex completions zsh > ~/.zfunc/_filedex
    ///   fish:  filedex completions fish > ~/.config/fish/completions/filedex.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::diagnostics::{DiagnosticSink, TracingSink};
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;

    // Completions don't need services
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    config.log_config();

    let sink: Box<dyn DiagnosticSink> = match cli.format {
        OutputFormat::Human if !cli.quiet => Box::new(output::ConsoleSink),
        _ => Box::new(TracingSink),
    };
    let mut services = Services::with_sink(config, sink);

    match cli.command {
        Commands::Index(args) => commands::index::execute(args, &mut services, cli.format),
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::Info(args) => commands::info::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
