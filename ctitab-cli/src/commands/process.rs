//! Process command implementation

use anyhow::{Context, Result};
use clap::Args;
use ctitab_core::{Catalog, CatalogProcessor, RuleSet};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::TableReader;
use crate::output::OutputTarget;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Located table as JSON (`-` for stdin)
    #[arg(short, long, value_name = "TABLE")]
    pub input: PathBuf,

    /// Catalog the table belongs to (default: from config, else apt)
    #[arg(short, long, value_enum)]
    pub catalog: Option<CatalogArg>,

    /// Output file (`-` for stdout, default: groups_<catalog>.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom rule configuration file
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// CLI configuration file
    #[arg(long, value_name = "FILE", env = "CTITAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Assemble rows in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogArg {
    /// Active APT groups
    Apt,
    /// Active cybercrime groups
    Crime,
}

impl From<CatalogArg> for Catalog {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Apt => Catalog::Apt,
            CatalogArg::Crime => Catalog::Crime,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting table processing");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let catalog = self.resolve_catalog(&config)?;

        let custom;
        let rules: &RuleSet = match self.rules_path(&config) {
            Some(path) => {
                log::info!("Loading rules from {}", path.display());
                custom = load_rules(&path)?;
                &custom
            }
            None => RuleSet::embedded(),
        };

        let table = TableReader::read(&self.input)?;
        let records = CatalogProcessor::with_rules(catalog, rules)
            .parallel(self.parallel || config.processing.parallel)
            .process_table(&table)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;

        if records.is_empty() {
            self.status("No data retrieved");
            return Ok(());
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(catalog.default_output_file()));
        let target = OutputTarget::from_path(&output);
        target.write(&records, &config.output)?;

        if let OutputTarget::File(path) = &target {
            self.status(format_args!(
                "Successfully wrote {} {} groups to {}",
                records.len(),
                catalog.label(),
                path.display()
            ));
        }

        Ok(())
    }

    /// Print a status line unless `--quiet` is set
    fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn resolve_catalog(&self, config: &CliConfig) -> Result<Catalog> {
        match self.catalog {
            Some(arg) => Ok(arg.into()),
            None => config
                .processing
                .default_catalog
                .parse::<Catalog>()
                .map_err(|e| CliError::ConfigError(e.to_string()).into()),
        }
    }

    fn rules_path(&self, config: &CliConfig) -> Option<PathBuf> {
        self.rules
            .clone()
            .or_else(|| config.processing.rules.as_ref().map(PathBuf::from))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn load_rules(path: &Path) -> Result<RuleSet> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    RuleSet::from_file(path)
        .map_err(|e| CliError::ConfigError(e.to_string()))
        .with_context(|| format!("Failed to load rules from {}", path.display()))
}
