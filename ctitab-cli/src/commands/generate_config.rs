//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use ctitab_core::rules::DEFAULT_RULES_TOML;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating rule configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, DEFAULT_RULES_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the sector dictionary, markers or column headers");
        println!("2. Validate your configuration:");
        println!("   ctitab validate --rules {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   ctitab process -i table.json -c apt --rules {}",
            self.output.display()
        );

        Ok(())
    }
}
