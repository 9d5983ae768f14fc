//! Configuration structures and validation
//!
//! This module defines the TOML schema for segmentation rules.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub text: TextRules,
    pub sectors: SectorRules,
    pub properties: PropertyRules,
    pub characteristics: CharacteristicRules,
    pub columns: Columns,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Shared text rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRules {
    /// Uppercase letters outside A-Z that count as a capital
    #[serde(default)]
    pub extra_uppercase: Vec<char>,
    /// Punctuation that can end a sentence
    #[serde(default = "default_terminators")]
    pub sentence_terminators: Vec<char>,
}

impl Default for TextRules {
    fn default() -> Self {
        Self {
            extra_uppercase: Vec::new(),
            sentence_terminators: default_terminators(),
        }
    }
}

/// Sector boundary dictionary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRules {
    pub boundary_terms: Vec<String>,
    #[serde(default)]
    pub no_data: Vec<String>,
    #[serde(default = "default_unknown_sector")]
    pub unknown: String,
}

/// Property split patterns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRules {
    #[serde(default)]
    pub split_after: Vec<PatternRule>,
    #[serde(default)]
    pub noise: Vec<String>,
    #[serde(default = "default_empty_properties")]
    pub empty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Crime characteristics markers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicRules {
    pub leak_site_phrases: Vec<String>,
    pub leak_site_pattern: String,
    pub responsible_marker: String,
}

/// Column headers per catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Columns {
    pub apt: AptColumns,
    pub crime: CrimeColumns,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptColumns {
    pub name: String,
    pub sectors: String,
    pub characteristics: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeColumns {
    /// Header candidates for the name column, in lookup order
    pub name: Vec<String>,
    pub description: String,
    pub characteristics: String,
}

fn default_terminators() -> Vec<char> {
    vec!['.', '!']
}

fn default_unknown_sector() -> String {
    "unbekannt".to_string()
}

fn default_empty_properties() -> String {
    "No specific characteristics listed".to_string()
}

impl RuleConfig {
    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: RuleConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the segmenters cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.sectors.boundary_terms.is_empty() {
            return Err(CatalogError::Config(
                "sectors.boundary_terms must not be empty".to_string(),
            ));
        }
        if let Some(term) = self.sectors.boundary_terms.iter().find(|t| t.trim().is_empty()) {
            return Err(CatalogError::Config(format!(
                "sectors.boundary_terms contains a blank term: {term:?}"
            )));
        }
        if self.sectors.unknown.trim().is_empty() {
            return Err(CatalogError::Config(
                "sectors.unknown must not be blank".to_string(),
            ));
        }
        if self.characteristics.responsible_marker.trim().is_empty() {
            return Err(CatalogError::Config(
                "characteristics.responsible_marker must not be blank".to_string(),
            ));
        }
        if self.characteristics.leak_site_phrases.is_empty() {
            return Err(CatalogError::Config(
                "characteristics.leak_site_phrases must not be empty".to_string(),
            ));
        }
        if let Some(phrase) = self
            .characteristics
            .leak_site_phrases
            .iter()
            .find(|p| p.trim().is_empty())
        {
            return Err(CatalogError::Config(format!(
                "characteristics.leak_site_phrases contains a blank phrase: {phrase:?}"
            )));
        }
        if matches_empty(&self.characteristics.leak_site_pattern) {
            return Err(CatalogError::Config(
                "characteristics.leak_site_pattern must not match empty text".to_string(),
            ));
        }
        if let Some(rule) = self
            .properties
            .split_after
            .iter()
            .find(|rule| matches_empty(&rule.pattern))
        {
            return Err(CatalogError::Config(format!(
                "properties.split_after pattern {:?} must not match empty text",
                rule.pattern
            )));
        }
        if self.columns.crime.name.is_empty() {
            return Err(CatalogError::Config(
                "columns.crime.name needs at least one header".to_string(),
            ));
        }
        Ok(())
    }
}

/// Whether `pattern` compiles and matches the empty string.
///
/// Patterns that fail to compile are reported when the rule set is built.
fn matches_empty(pattern: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(""))
}
