//! ctitab command-line entry point

use anyhow::Result;
use clap::Parser;
use ctitab_cli::commands::Commands;

/// Structure BSI threat-intelligence group tables into JSON
#[derive(Debug, Parser)]
#[command(name = "ctitab", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
