//! Boundary rules and the compiled rule set
//!
//! Table cells arrive with their items glued together. Every segmenter works
//! the same way: an ordered list of [`BoundaryRule`]s inserts
//! [`BOUNDARY_MARKER`] into a working copy of the text, and the result is
//! split on that marker. A rule only fires when the character directly after
//! its match is an uppercase letter, and the marker itself is never
//! uppercase, so an inserted marker cannot re-trigger any rule at the same
//! position.

pub mod config;
pub mod loader;

use regex::Regex;

use crate::characteristics::CharacteristicsParser;
use crate::error::{CatalogError, Result};
use crate::segment::{PropertySegmenter, SectorSegmenter, SentenceSegmenter};

pub use config::RuleConfig;
pub use loader::{embedded, DEFAULT_RULES_TOML};

/// Internal delimiter inserted between recovered items
pub const BOUNDARY_MARKER: char = '\u{1F}';

/// Set of characters treated as uppercase by a rule's lookahead
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UppercaseSet {
    extra: Vec<char>,
}

impl UppercaseSet {
    /// Plain A-Z
    pub fn ascii() -> Self {
        Self { extra: Vec::new() }
    }

    /// A-Z plus the given letters
    pub fn with_extra(extra: &[char]) -> Self {
        Self {
            extra: extra.to_vec(),
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        ch.is_ascii_uppercase() || self.extra.contains(&ch)
    }

    /// Whether `text` starts with a member of the set
    pub fn starts(&self, text: &str) -> bool {
        text.chars().next().is_some_and(|c| self.contains(c))
    }
}

/// One entry of an ordered boundary chain
#[derive(Debug, Clone)]
pub struct BoundaryRule {
    regex: Regex,
    followed_by: UppercaseSet,
    description: Option<String>,
}

impl BoundaryRule {
    /// Rule matching a literal dictionary term
    pub fn literal(term: &str, followed_by: UppercaseSet) -> Result<Self> {
        Self::pattern(&regex::escape(term), None, followed_by)
    }

    /// Rule matching a regular expression
    pub fn pattern(
        pattern: &str,
        description: Option<String>,
        followed_by: UppercaseSet,
    ) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| CatalogError::Rule {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            regex,
            followed_by,
            description,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Insert a marker after every match that is directly followed by an
    /// uppercase letter.
    ///
    /// A rejected match does not consume its text: the search resumes one
    /// character after the rejected match's start.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 4);
        let mut copied = 0;
        let mut pos = 0;

        while pos <= text.len() {
            let Some(m) = self.regex.find_at(text, pos) else {
                break;
            };

            if self.followed_by.starts(&text[m.end()..]) {
                out.push_str(&text[copied..m.end()]);
                out.push(BOUNDARY_MARKER);
                copied = m.end();
                pos = if m.start() == m.end() {
                    match next_char_boundary(text, m.end()) {
                        Some(next) => next,
                        None => break,
                    }
                } else {
                    m.end()
                };
            } else {
                match next_char_boundary(text, m.start()) {
                    Some(next) => pos = next,
                    None => break,
                }
            }
        }

        out.push_str(&text[copied..]);
        out
    }
}

/// Apply a rule chain in order.
///
/// A marker character already present in `text` is turned into a space
/// first, so only the chain decides where items split.
pub fn apply_chain(rules: &[BoundaryRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.replace(BOUNDARY_MARKER, " "), |working, rule| {
            rule.apply(&working)
        })
}

/// Split marked text into trimmed, non-empty pieces
pub fn split_on_marker(text: &str) -> Vec<String> {
    text.split(BOUNDARY_MARKER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn next_char_boundary(text: &str, index: usize) -> Option<usize> {
    text[index..].chars().next().map(|c| index + c.len_utf8())
}

/// All segmenters compiled from one [`RuleConfig`]
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    sectors: SectorSegmenter,
    properties: PropertySegmenter,
    sentences: SentenceSegmenter,
    characteristics: CharacteristicsParser,
    columns: config::Columns,
}

impl RuleSet {
    /// Compile a validated configuration
    pub fn from_config(config: &RuleConfig) -> Result<Self> {
        config.validate()?;

        let sentences = SentenceSegmenter::from_config(&config.text);
        Ok(Self {
            name: config.metadata.name.clone(),
            sectors: SectorSegmenter::from_config(&config.sectors, &config.text)?,
            properties: PropertySegmenter::from_config(&config.properties)?,
            characteristics: CharacteristicsParser::from_config(
                &config.characteristics,
                sentences.clone(),
            )?,
            sentences,
            columns: config.columns.clone(),
        })
    }

    /// Parse, validate and compile TOML rule text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Self::from_config(&RuleConfig::from_toml_str(source)?)
    }

    /// Load a rule file from disk
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The rule set compiled into the crate
    pub fn embedded() -> &'static RuleSet {
        embedded()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sectors(&self) -> &SectorSegmenter {
        &self.sectors
    }

    pub fn properties(&self) -> &PropertySegmenter {
        &self.properties
    }

    pub fn sentences(&self) -> &SentenceSegmenter {
        &self.sentences
    }

    pub fn characteristics(&self) -> &CharacteristicsParser {
        &self.characteristics
    }

    pub fn columns(&self) -> &config::Columns {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(text: &str) -> String {
        text.replace(BOUNDARY_MARKER, "|")
    }

    #[test]
    fn test_literal_rule_requires_uppercase() {
        let rule = BoundaryRule::literal("Luftfahrt", UppercaseSet::ascii()).unwrap();

        assert_eq!(marked(&rule.apply("LuftfahrtSchiff")), "Luftfahrt|Schiff");
        assert_eq!(marked(&rule.apply("Luftfahrt Schiff")), "Luftfahrt Schiff");
        assert_eq!(marked(&rule.apply("Luftfahrtindustrie")), "Luftfahrtindustrie");
        assert_eq!(marked(&rule.apply("Luftfahrt")), "Luftfahrt");
    }

    #[test]
    fn test_extra_uppercase_letters() {
        let ascii = BoundaryRule::literal("Ordnung", UppercaseSet::ascii()).unwrap();
        let german =
            BoundaryRule::literal("Ordnung", UppercaseSet::with_extra(&['Ä', 'Ö', 'Ü'])).unwrap();

        assert_eq!(marked(&ascii.apply("OrdnungÖffentlich")), "OrdnungÖffentlich");
        assert_eq!(marked(&german.apply("OrdnungÖffentlich")), "Ordnung|Öffentlich");
    }

    #[test]
    fn test_rule_is_idempotent() {
        let rule = BoundaryRule::literal("Verwaltung", UppercaseSet::ascii()).unwrap();
        let once = rule.apply("VerwaltungLuftfahrtVerwaltungHandel");
        let twice = rule.apply(&once);

        assert_eq!(once, twice);
        assert_eq!(marked(&once), "Verwaltung|LuftfahrtVerwaltung|Handel");
    }

    #[test]
    fn test_rejected_match_does_not_hide_nested_match() {
        let rule = BoundaryRule::pattern(r"x\w{2}", None, UppercaseSet::ascii()).unwrap();
        // "xxB" is rejected (followed by "a"); the retry one character later
        // finds "xBa", which is followed by "C".
        assert_eq!(marked(&rule.apply("xxBaC")), "xxBa|C");
    }

    #[test]
    fn test_chain_applies_in_order() {
        let rules = vec![
            BoundaryRule::literal("Ordnung", UppercaseSet::ascii()).unwrap(),
            BoundaryRule::literal("Verwaltung", UppercaseSet::ascii()).unwrap(),
        ];
        let result = apply_chain(&rules, "VerwaltungOrdnungHandel");
        assert_eq!(
            split_on_marker(&result),
            vec!["Verwaltung", "Ordnung", "Handel"]
        );
    }

    #[test]
    fn test_literal_marker_in_input_is_not_a_boundary() {
        let rules = [BoundaryRule::pattern(r"Server\s+", None, UppercaseSet::ascii()).unwrap()];
        let text = "Finanzsektor)\u{1F}Verantwortlich Server Verantwortlich";

        let items = split_on_marker(&apply_chain(&rules, text));
        assert_eq!(
            items,
            vec!["Finanzsektor) Verantwortlich Server", "Verantwortlich"]
        );
    }

    #[test]
    fn test_split_on_marker_drops_blank_pieces() {
        let text = format!(" a {m}{m} b {m} ", m = BOUNDARY_MARKER);
        assert_eq!(split_on_marker(&text), vec!["a", "b"]);
        assert!(split_on_marker("").is_empty());
    }

    #[test]
    fn test_invalid_pattern_reports_rule_error() {
        let err = BoundaryRule::pattern("CVE-(", None, UppercaseSet::ascii()).unwrap_err();
        assert!(matches!(err, CatalogError::Rule { .. }));
    }

    #[test]
    fn test_embedded_rule_set_compiles() {
        let rules = RuleSet::embedded();
        assert_eq!(rules.name(), "BSI active group catalogs");
        assert_eq!(rules.sectors().terms().len(), 13);
        assert_eq!(rules.columns().apt.name, "Gruppenname und Aliase");
    }
}
