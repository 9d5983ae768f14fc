//! Structured catalog records
//!
//! Records are built once per row by the assemblers and are read-only
//! afterwards. Field order matches the serialized JSON layout.

use serde::{Deserialize, Serialize};

use crate::aliases::GroupAliases;
use crate::characteristics::Characteristics;

/// One row of the APT catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptGroupRecord {
    group_name: String,
    aliases: Vec<String>,
    targeted_sectors: Vec<String>,
    characteristics: Vec<String>,
}

impl AptGroupRecord {
    /// Build a record. Empty `characteristics` are replaced by
    /// `[empty_sentinel]`.
    pub fn new(
        names: GroupAliases,
        targeted_sectors: Vec<String>,
        characteristics: Vec<String>,
        empty_sentinel: &str,
    ) -> Self {
        let characteristics = if characteristics.is_empty() {
            vec![empty_sentinel.to_string()]
        } else {
            characteristics
        };

        Self {
            group_name: names.name,
            aliases: names.aliases,
            targeted_sectors,
            characteristics,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn targeted_sectors(&self) -> &[String] {
        &self.targeted_sectors
    }

    pub fn characteristics(&self) -> &[String] {
        &self.characteristics
    }
}

/// One row of the crime catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeGroupRecord {
    group_name: String,
    aliases: Vec<String>,
    description: Vec<String>,
    responsible_for: Vec<String>,
    has_leak_site: bool,
    additional_characteristics: Vec<String>,
}

impl CrimeGroupRecord {
    pub fn new(names: GroupAliases, description: Vec<String>, traits: Characteristics) -> Self {
        Self {
            group_name: names.name,
            aliases: names.aliases,
            description,
            responsible_for: traits.responsible_for,
            has_leak_site: traits.leak_site,
            additional_characteristics: traits.additional_info,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn responsible_for(&self) -> &[String] {
        &self.responsible_for
    }

    pub fn has_leak_site(&self) -> bool {
        self.has_leak_site
    }

    pub fn additional_characteristics(&self) -> &[String] {
        &self.additional_characteristics
    }
}

/// Records of one catalog run, serialized as a plain JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogRecords {
    Apt(Vec<AptGroupRecord>),
    Crime(Vec<CrimeGroupRecord>),
}

impl CatalogRecords {
    pub fn len(&self) -> usize {
        match self {
            CatalogRecords::Apt(records) => records.len(),
            CatalogRecords::Crime(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Group names in row order
    pub fn group_names(&self) -> Vec<&str> {
        match self {
            CatalogRecords::Apt(records) => records.iter().map(|r| r.group_name()).collect(),
            CatalogRecords::Crime(records) => records.iter().map(|r| r.group_name()).collect(),
        }
    }
}
