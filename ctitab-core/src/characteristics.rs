//! Characteristics structuring for the crime catalog
//!
//! A characteristics cell mixes three kinds of content:
//!
//! - a leak-site statement (`"Leak-Seite bekannt."`), reduced to a flag
//! - `"Verantwortlich für <target>."` statements, collected as targets
//! - free narrative, kept as sentences
//!
//! The cell is partitioned on the responsibility marker and the segments are
//! walked with a two-state loop: while scanning, a segment is narrative;
//! right after a marker, the segment up to its first period is a target.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::rules::config::CharacteristicRules;
use crate::rules::RuleSet;
use crate::segment::SentenceSegmenter;

/// Structured view of a characteristics cell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    pub responsible_for: Vec<String>,
    pub leak_site: bool,
    pub additional_info: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    CapturingResponsible,
}

/// Parses crime characteristics cells
#[derive(Debug, Clone)]
pub struct CharacteristicsParser {
    leak_site_phrases: Vec<String>,
    leak_site_pattern: Regex,
    responsible_marker: String,
    sentences: SentenceSegmenter,
}

impl CharacteristicsParser {
    pub fn from_config(rules: &CharacteristicRules, sentences: SentenceSegmenter) -> Result<Self> {
        let leak_site_pattern =
            Regex::new(&rules.leak_site_pattern).map_err(|source| CatalogError::Rule {
                pattern: rules.leak_site_pattern.clone(),
                source,
            })?;

        Ok(Self {
            leak_site_phrases: rules.leak_site_phrases.clone(),
            leak_site_pattern,
            responsible_marker: rules.responsible_marker.clone(),
            sentences,
        })
    }

    pub fn responsible_marker(&self) -> &str {
        &self.responsible_marker
    }

    /// Structure a characteristics cell. Total for any input.
    pub fn parse(&self, text: &str) -> Characteristics {
        if text.is_empty() {
            return Characteristics::default();
        }

        let leak_site = self
            .leak_site_phrases
            .iter()
            .any(|phrase| text.contains(phrase.as_str()));
        let working = if leak_site {
            self.leak_site_pattern.replace_all(text, " ").into_owned()
        } else {
            text.to_string()
        };

        let (responsible_for, mut additional_info) = self.partition(&working);

        if responsible_for.is_empty() && additional_info.is_empty() {
            additional_info = self.sentences.split(&working);
        }

        Characteristics {
            responsible_for,
            leak_site,
            additional_info,
        }
    }

    /// Walk the marker partition of `text`
    fn partition(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let marker = self.responsible_marker.as_str();
        let marker_trimmed = marker.trim();

        let mut segments = Vec::new();
        for (i, part) in text.split(marker).enumerate() {
            if i > 0 {
                segments.push(marker);
            }
            segments.push(part);
        }

        let mut responsible_for = Vec::new();
        let mut additional_info = Vec::new();
        let mut state = State::Scanning;

        for segment in segments {
            match state {
                State::CapturingResponsible => {
                    let target = segment.split('.').next().unwrap_or_default().trim();
                    responsible_for.push(target.to_string());
                    state = State::Scanning;
                }
                State::Scanning if segment.trim() == marker_trimmed => {
                    state = State::CapturingResponsible;
                }
                State::Scanning => {
                    additional_info.extend(
                        self.sentences
                            .split(segment)
                            .into_iter()
                            .filter(|sentence| !sentence.starts_with(marker_prefix(marker_trimmed))),
                    );
                }
            }
        }

        (responsible_for, additional_info)
    }
}

/// First word of the marker ("Verantwortlich")
fn marker_prefix(marker: &str) -> &str {
    marker.split_whitespace().next().unwrap_or(marker)
}

/// Structure a characteristics cell with the embedded rules
pub fn parse_characteristics(text: &str) -> Characteristics {
    RuleSet::embedded().characteristics().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_characteristics(""), Characteristics::default());
    }

    #[test]
    fn test_leak_site_and_responsible() {
        let parsed = parse_characteristics("Leak-Seite bekannt. Verantwortlich für Finanzsektor.");
        assert!(parsed.leak_site);
        assert_eq!(parsed.responsible_for, strings(&["Finanzsektor"]));
        assert!(parsed.additional_info.is_empty());
    }

    #[test]
    fn test_leak_site_only() {
        let parsed = parse_characteristics("Leak-Seite bekannt.");
        assert!(parsed.leak_site);
        assert!(parsed.responsible_for.is_empty());
        assert!(parsed.additional_info.is_empty());
    }

    #[test]
    fn test_plural_leak_sites() {
        let parsed = parse_characteristics("Leak-Seiten bekannt. Nutzt doppelte Erpressung.");
        assert!(parsed.leak_site);
        assert_eq!(parsed.additional_info, strings(&["Nutzt doppelte Erpressung."]));
    }

    #[test]
    fn test_plural_with_words_in_between_sets_flag_only() {
        let parsed = parse_characteristics("Mehrere Leak-Seiten sind bekannt.");
        assert!(parsed.leak_site);
        assert_eq!(parsed.additional_info, strings(&["Mehrere Leak-Seiten sind bekannt."]));
    }

    #[test]
    fn test_multiple_responsible_markers() {
        let parsed = parse_characteristics(
            "Verantwortlich für Angriffe auf Kliniken. Verantwortlich für Datendiebstahl. Aktiv seit 2020.",
        );
        assert!(!parsed.leak_site);
        assert_eq!(
            parsed.responsible_for,
            strings(&["Angriffe auf Kliniken", "Datendiebstahl"])
        );
        assert!(parsed.additional_info.is_empty());
    }

    #[test]
    fn test_narrative_before_marker() {
        let parsed = parse_characteristics(
            "Ransomware-as-a-Service. Hohe Lösegeldforderungen. Verantwortlich für Angriff auf Kommune X.",
        );
        assert_eq!(
            parsed.additional_info,
            strings(&["Ransomware-as-a-Service.", "Hohe Lösegeldforderungen."])
        );
        assert_eq!(parsed.responsible_for, strings(&["Angriff auf Kommune X"]));
    }

    #[test]
    fn test_narrative_only() {
        let parsed = parse_characteristics("Sehr aktiv. Nutzt Affiliates!");
        assert!(parsed.responsible_for.is_empty());
        assert_eq!(parsed.additional_info, strings(&["Sehr aktiv.", "Nutzt Affiliates!"]));
    }

    #[test]
    fn test_marker_at_end() {
        let parsed = parse_characteristics("Aktiv. Verantwortlich für ");
        assert_eq!(parsed.additional_info, strings(&["Aktiv."]));
        assert_eq!(parsed.responsible_for, strings(&[""]));
    }

    #[test]
    fn test_sentence_starting_with_marker_word_goes_to_fallback() {
        let parsed = parse_characteristics("Verantwortlich fürs Netz.");
        assert!(parsed.responsible_for.is_empty());
        assert_eq!(parsed.additional_info, strings(&["Verantwortlich fürs Netz."]));
    }
}
