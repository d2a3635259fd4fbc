//! filedex CLI - build a cached directory listing and search its file names
//!
//! # Examples
//!
//! ```bash
//! # Index a directory tree
//! filedex index /srv/share
//!
//! # Search file names (contains / starts-with / ends-with)
//! filedex search report
//! filedex search .csv --mode ends-with
//!
//! # Show where the index lives
//! filedex info
//! ```

use clap::Parser;
use filedex::cli::{output, run, Cli, OutputFormat};
use tracing_subscriber::EnvFilter;

fn init_logging(format: OutputFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "filedex=warn".into());
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // stdout carries command output
        .with_env_filter(filter);

    match format {
        OutputFormat::Human => builder.compact().init(),
        OutputFormat::Json => builder.json().with_ansi(false).init(),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.format);

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
