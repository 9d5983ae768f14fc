//! Tests for rule files loaded from disk

use ctitab_core::rules::DEFAULT_RULES_TOML;
use ctitab_core::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_rules_roundtrip_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.toml");
    fs::write(&path, DEFAULT_RULES_TOML).unwrap();

    let rules = RuleSet::from_file(&path).unwrap();
    assert_eq!(rules.sectors().terms(), RuleSet::embedded().sectors().terms());
    assert_eq!(
        rules.sectors().split("VerwaltungLuftfahrt"),
        vec!["Verwaltung", "Luftfahrt"]
    );
}

#[test]
fn test_extended_dictionary() {
    let source = DEFAULT_RULES_TOML.replace(
        "    \"Wirtschaftsaufsicht\",\n",
        "    \"Wirtschaftsaufsicht\",\n    \"Energieversorgung\",\n",
    );
    let rules = RuleSet::from_toml_str(&source).unwrap();

    assert_eq!(rules.sectors().terms().len(), 14);
    assert_eq!(
        rules.sectors().split("EnergieversorgungGesundheitswesen"),
        vec!["Energieversorgung", "Gesundheitswesen"]
    );
    // The embedded rules do not know the new term
    assert_eq!(
        split_sectors("EnergieversorgungGesundheitswesen"),
        vec!["EnergieversorgungGesundheitswesen"]
    );
}

#[test]
fn test_custom_columns_drive_assembly() {
    let source = DEFAULT_RULES_TOML.replace(
        "name = \"Gruppenname und Aliase\"",
        "name = \"Name\"",
    );
    let rules = RuleSet::from_toml_str(&source).unwrap();
    let table = RawTable::new(vec!["Name".to_string()], vec![vec!["APT41 / Winnti".to_string()]]);

    let records = CatalogProcessor::with_rules(Catalog::Apt, &rules)
        .process_table(&table)
        .unwrap();
    assert_eq!(records.group_names(), vec!["APT41"]);
}

#[test]
fn test_invalid_pattern_rejected() {
    let source = DEFAULT_RULES_TOML.replace(
        r"leak_site_pattern = 'Leak-Seite[n]?\s+bekannt\.?\s*'",
        r"leak_site_pattern = 'Leak-Seite[n'",
    );
    let err = RuleSet::from_toml_str(&source).unwrap_err();
    assert!(matches!(err, CatalogError::Rule { .. }));
}

#[test]
fn test_blank_leak_phrase_rejected() {
    let source = DEFAULT_RULES_TOML.replace(
        r#"leak_site_phrases = ["Leak-Seite bekannt", "Leak-Seiten"]"#,
        r#"leak_site_phrases = ["Leak-Seite bekannt", ""]"#,
    );
    assert_ne!(source, DEFAULT_RULES_TOML);
    let err = RuleSet::from_toml_str(&source).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
}

#[test]
fn test_empty_leak_pattern_rejected() {
    let source = DEFAULT_RULES_TOML.replace(
        r"leak_site_pattern = 'Leak-Seite[n]?\s+bekannt\.?\s*'",
        "leak_site_pattern = ''",
    );
    assert_ne!(source, DEFAULT_RULES_TOML);
    let err = RuleSet::from_toml_str(&source).unwrap_err();
    assert!(err.to_string().contains("leak_site_pattern"));
}

#[test]
fn test_missing_file() {
    let err = RuleSet::from_file(std::path::Path::new("/nonexistent/rules.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
