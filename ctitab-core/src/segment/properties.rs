//! Special-characteristics segmentation (APT catalog)
//!
//! Statements are glued together without separators. Two patterns mark a
//! safe split point: a CVE identifier with its vendor note in parentheses,
//! and the word "Server" followed by a new capitalized statement. The CVE
//! pattern is matched as a whole so the identifier itself is never cut.

use crate::error::Result;
use crate::rules::config::PropertyRules;
use crate::rules::{apply_chain, split_on_marker, BoundaryRule, RuleSet, UppercaseSet};

/// Splits a characteristics cell into statements
#[derive(Debug, Clone)]
pub struct PropertySegmenter {
    rules: Vec<BoundaryRule>,
    noise: Vec<String>,
    empty: String,
}

impl PropertySegmenter {
    pub fn from_config(properties: &PropertyRules) -> Result<Self> {
        let rules = properties
            .split_after
            .iter()
            .map(|rule| {
                BoundaryRule::pattern(&rule.pattern, rule.description.clone(), UppercaseSet::ascii())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            noise: properties.noise.clone(),
            empty: properties.empty.clone(),
        })
    }

    pub fn rules(&self) -> &[BoundaryRule] {
        &self.rules
    }

    /// Sentinel used by the APT record when nothing survives
    pub fn empty_sentinel(&self) -> &str {
        &self.empty
    }

    /// Split a characteristics cell. May return an empty list.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        split_on_marker(&apply_chain(&self.rules, text))
            .into_iter()
            .filter(|piece| !self.noise.iter().any(|noise| noise == piece))
            .collect()
    }
}

/// Split a characteristics cell with the embedded rules
pub fn split_properties(text: &str) -> Vec<String> {
    RuleSet::embedded().properties().split(text)
}
