//! Group name and alias parsing
//!
//! Both catalogs put the primary name and its aliases in one cell, with a
//! different convention each:
//!
//! - APT: `"APT28 / Fancy Bear / Sofacy"`
//! - Crime: `"LockBit (aka LockBit 2.0, LockBit Black)"`, or a plain comma
//!   list when the parenthetical is missing

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// Name used when an APT name cell is empty
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Crime catalog placeholder for unnamed groups
pub const NOT_AVAILABLE: &str = "N/A";

/// Primary name plus aliases in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAliases {
    pub name: String,
    pub aliases: Vec<String>,
}

impl GroupAliases {
    fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
        }
    }

    fn from_parts<'a>(mut parts: impl Iterator<Item = &'a str>) -> Self {
        let name = parts.next().unwrap_or_default().trim().to_string();
        Self {
            name,
            aliases: parts.map(|part| part.trim().to_string()).collect(),
        }
    }
}

/// Catalog-specific alias convention
pub trait AliasParser {
    /// Split a name cell into name and aliases. Total for any input.
    fn parse(&self, text: &str) -> GroupAliases;
}

/// Slash-separated names of the APT catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct AptAliases;

impl AliasParser for AptAliases {
    fn parse(&self, text: &str) -> GroupAliases {
        let text = normalize(text);
        if text.is_empty() {
            return GroupAliases::bare(UNKNOWN_GROUP);
        }
        GroupAliases::from_parts(text.split('/'))
    }
}

/// "aka" parentheticals of the crime catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct CrimeAliases;

fn aka_pattern() -> &'static Regex {
    static AKA: OnceLock<Regex> = OnceLock::new();
    AKA.get_or_init(|| {
        Regex::new(r"^([^(]+)\s*\(aka\s+([^)]+)\)").expect("aka pattern is valid")
    })
}

impl AliasParser for CrimeAliases {
    fn parse(&self, text: &str) -> GroupAliases {
        let text = normalize(text);
        if text.eq_ignore_ascii_case(NOT_AVAILABLE) {
            return GroupAliases::bare(NOT_AVAILABLE);
        }

        if text.contains("(aka") {
            if let Some(caps) = aka_pattern().captures(&text) {
                return GroupAliases {
                    name: caps[1].trim().to_string(),
                    aliases: caps[2]
                        .trim()
                        .split(',')
                        .map(|alias| alias.trim().to_string())
                        .collect(),
                };
            }
            log::trace!("Malformed aka parenthetical, falling back to comma split: {text}");
        }

        GroupAliases::from_parts(text.split(','))
    }
}

/// Parse an APT name cell
pub fn parse_apt_aliases(text: &str) -> GroupAliases {
    AptAliases.parse(text)
}

/// Parse a crime name cell
pub fn parse_crime_aliases(text: &str) -> GroupAliases {
    CrimeAliases.parse(text)
}
