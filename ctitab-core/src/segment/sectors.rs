//! Economic sector segmentation
//!
//! Sector names (WZ 2008) are listed without separators, e.g.
//! `"Öffentliche VerwaltungLuftfahrt"`. A closed dictionary of terms that end
//! a sector name drives the split.

use crate::error::Result;
use crate::rules::config::{SectorRules, TextRules};
use crate::rules::{apply_chain, split_on_marker, BoundaryRule, RuleSet, UppercaseSet};

/// Splits a sector cell on dictionary term boundaries
#[derive(Debug, Clone)]
pub struct SectorSegmenter {
    rules: Vec<BoundaryRule>,
    terms: Vec<String>,
    no_data: Vec<String>,
    unknown: String,
}

impl SectorSegmenter {
    pub fn from_config(sectors: &SectorRules, text: &TextRules) -> Result<Self> {
        let uppercase = UppercaseSet::with_extra(&text.extra_uppercase);
        let rules = sectors
            .boundary_terms
            .iter()
            .map(|term| BoundaryRule::literal(term, uppercase.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            terms: sectors.boundary_terms.clone(),
            no_data: sectors
                .no_data
                .iter()
                .map(|token| token.to_lowercase())
                .collect(),
            unknown: sectors.unknown.clone(),
        })
    }

    /// Dictionary terms in rule order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Sentinel returned for an empty cell
    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    /// Split a sector cell. Never returns an empty list.
    ///
    /// An empty cell yields the unknown sentinel; a "no data" token is
    /// passed through as written.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return vec![self.unknown.clone()];
        }
        if self.no_data.contains(&text.to_lowercase()) {
            return vec![text.to_string()];
        }

        let sectors = split_on_marker(&apply_chain(&self.rules, text));
        if sectors.is_empty() {
            vec![text.to_string()]
        } else {
            sectors
        }
    }
}

/// Split a sector cell with the embedded dictionary
pub fn split_sectors(text: &str) -> Vec<String> {
    RuleSet::embedded().sectors().split(text)
}
