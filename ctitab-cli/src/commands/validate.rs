//! Validate command implementation

use anyhow::Result;
use clap::Args;
use ctitab_core::RuleSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule configuration: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Configuration is valid!");
                println!("  Name: {}", rules.name());
                println!("  Sector terms: {}", rules.sectors().terms().len());
                println!("  Property rules: {}", rules.properties().rules().len());
                println!(
                    "  Responsibility marker: {:?}",
                    rules.characteristics().responsible_marker()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
