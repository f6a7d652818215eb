use std::path::PathBuf;

use clap::Parser;

/// Terminal front end for the frontier blog catalog and newsletter form.
///
/// Each line read from stdin is submitted as an email address.
#[derive(Debug, Parser)]
#[command(name = "frontier", version)]
pub struct Cli {
    /// RON configuration file; built-in defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Read the catalog from this JSON file instead of the configured source.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Render the initial view and exit.
    #[arg(long)]
    pub once: bool,
}
