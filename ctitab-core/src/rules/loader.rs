//! Embedded rule configuration
//!
//! The default rules ship inside the crate and are compiled once on first
//! access.

use std::sync::OnceLock;

use super::RuleSet;

/// Default rule configuration in TOML form
pub const DEFAULT_RULES_TOML: &str = include_str!("../../configs/rules.toml");

static EMBEDDED: OnceLock<RuleSet> = OnceLock::new();

/// Rule set compiled from [`DEFAULT_RULES_TOML`]
pub fn embedded() -> &'static RuleSet {
    EMBEDDED.get_or_init(|| {
        log::debug!("Compiling embedded segmentation rules");
        RuleSet::from_toml_str(DEFAULT_RULES_TOML)
            .expect("embedded rule configuration must compile")
    })
}
