//! Catalog selection and batch processing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assembler::{assemble_all, AptAssembler, CrimeAssembler};
use crate::error::{CatalogError, Result};
use crate::records::CatalogRecords;
use crate::rules::RuleSet;
use crate::table::{RawRow, RawTable};
use crate::text::normalize;

/// Catalog identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    /// Advanced persistent threat groups
    Apt,
    /// Cybercrime groups
    Crime,
}

impl Catalog {
    pub const ALL: [Catalog; 2] = [Catalog::Apt, Catalog::Crime];

    /// Catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Catalog::Apt => "apt",
            Catalog::Crime => "crime",
        }
    }

    /// Label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Catalog::Apt => "APT",
            Catalog::Crime => "crime",
        }
    }

    /// Conventional output file name
    pub fn default_output_file(&self) -> &'static str {
        match self {
            Catalog::Apt => "groups_apt.json",
            Catalog::Crime => "groups_crime.json",
        }
    }

    /// Column headers the catalog reads, in lookup order.
    ///
    /// Table headers are normalized before lookup, so configured headers are
    /// listed normalized, once each.
    pub fn headers(&self, rules: &RuleSet) -> Vec<String> {
        let mut headers: Vec<String> = Vec::new();
        for header in self.configured_headers(rules) {
            let header = normalize(header);
            if !headers.contains(&header) {
                headers.push(header);
            }
        }
        headers
    }

    fn configured_headers<'r>(&self, rules: &'r RuleSet) -> Vec<&'r str> {
        let columns = rules.columns();
        match self {
            Catalog::Apt => vec![
                columns.apt.name.as_str(),
                columns.apt.sectors.as_str(),
                columns.apt.characteristics.as_str(),
            ],
            Catalog::Crime => columns
                .crime
                .name
                .iter()
                .map(String::as_str)
                .chain([
                    columns.crime.description.as_str(),
                    columns.crime.characteristics.as_str(),
                ])
                .collect(),
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Catalog {
    type Err = CatalogError;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "apt" => Ok(Catalog::Apt),
            "crime" => Ok(Catalog::Crime),
            _ => Err(CatalogError::UnknownCatalog {
                code: code.to_string(),
            }),
        }
    }
}

/// Processes whole tables for one catalog
#[derive(Debug, Clone, Copy)]
pub struct CatalogProcessor<'r> {
    catalog: Catalog,
    rules: &'r RuleSet,
    parallel: bool,
}

impl CatalogProcessor<'static> {
    /// Processor using the embedded rules
    pub fn new(catalog: Catalog) -> Self {
        Self::with_rules(catalog, RuleSet::embedded())
    }
}

impl<'r> CatalogProcessor<'r> {
    pub fn with_rules(catalog: Catalog, rules: &'r RuleSet) -> Self {
        Self {
            catalog,
            rules,
            parallel: false,
        }
    }

    /// Assemble rows on the rayon pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Assemble already-paired rows
    pub fn process_rows(&self, rows: &[RawRow]) -> CatalogRecords {
        log::debug!(
            "Assembling {} {} rows (parallel: {})",
            rows.len(),
            self.catalog,
            self.parallel
        );

        match self.catalog {
            Catalog::Apt => CatalogRecords::Apt(assemble_all(
                &AptAssembler::new(self.rules),
                rows,
                self.parallel,
            )),
            Catalog::Crime => CatalogRecords::Crime(assemble_all(
                &CrimeAssembler::new(self.rules),
                rows,
                self.parallel,
            )),
        }
    }

    /// Assemble a located table
    pub fn process_table(&self, table: &RawTable) -> Result<CatalogRecords> {
        self.warn_missing_headers(table);
        let rows = table.raw_rows()?;
        Ok(self.process_rows(&rows))
    }

    fn warn_missing_headers(&self, table: &RawTable) {
        let columns = self.rules.columns();
        let missing: Vec<String> = match self.catalog {
            Catalog::Apt => self.catalog.headers(self.rules),
            Catalog::Crime => {
                let mut expected = vec![
                    normalize(&columns.crime.description),
                    normalize(&columns.crime.characteristics),
                ];
                if !columns
                    .crime
                    .name
                    .iter()
                    .any(|h| table.has_header(&normalize(h)))
                {
                    expected.push(normalize(&columns.crime.name[0]));
                }
                expected
            }
        }
        .into_iter()
        .filter(|header| !table.has_header(header))
        .collect();

        for header in missing {
            log::warn!("Column '{header}' not found in {} table; cells read as empty", self.catalog);
        }
    }
}
