//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use ctitab_core::{Catalog, RuleSet};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Structure a located catalog table into JSON records
    Process(process::ProcessArgs),

    /// Validate a rule configuration file
    Validate(validate::ValidateArgs),

    /// Write the default rule configuration as a template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported catalogs and the columns they read
    Catalogs,

    /// List the sector boundary dictionary
    Sectors,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    pub fn execute(&self) {
        print!("{}", self.render(RuleSet::embedded()));
    }

    fn render(&self, rules: &RuleSet) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Catalogs => {
                out.push_str("Available catalogs:\n");
                for catalog in Catalog::ALL {
                    out.push_str(&format!(
                        "  {:<6} -> {}\n",
                        catalog.code(),
                        catalog.default_output_file()
                    ));
                    for header in catalog.headers(rules) {
                        out.push_str(&format!("           {header:?}\n"));
                    }
                }
            }
            ListCommands::Sectors => {
                out.push_str("Sector boundary terms:\n");
                for term in rules.sectors().terms() {
                    out.push_str(&format!("  {term}\n"));
                }
                out.push_str(&format!("Unknown sector: {}\n", rules.sectors().unknown()));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Sectors,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Sectors"));
    }

    #[test]
    fn test_list_catalogs() {
        let output = ListCommands::Catalogs.render(RuleSet::embedded());
        assert!(output.contains("apt"));
        assert!(output.contains("groups_crime.json"));
        assert!(output.contains("\"Gruppenname und Aliase\""));
        assert!(output.contains("\"Gruppenname\""));
        assert!(!output.contains("\"Gruppenname \""));
    }

    #[test]
    fn test_list_sectors_keeps_dictionary_order() {
        let output = ListCommands::Sectors.render(RuleSet::embedded());
        let ordnung = output.find("Ordnung").unwrap();
        let verwaltung = output.find("Verwaltung").unwrap();
        assert!(ordnung < verwaltung);
        assert!(output.contains("Wirtschaftsaufsicht"));
        assert!(output.ends_with("Unknown sector: unbekannt\n"));
    }
}
