//! Output formatting module

use anyhow::{Context, Result};
use ctitab_core::CatalogRecords;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;

pub mod json;

pub use json::JsonFormatter;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Write one catalog's records and finish the document
    fn write_records(&mut self, records: &CatalogRecords) -> Result<()>;
}

/// Where the records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file, replaced atomically
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }

    /// Write `records` to the target.
    ///
    /// File output goes to a temporary sibling first and is renamed into
    /// place only after the document is complete.
    pub fn write(&self, records: &CatalogRecords, config: &OutputConfig) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                JsonFormatter::new(stdout.lock(), config.pretty_json)
                    .trailing_newline(config.trailing_newline)
                    .write_records(records)
            }
            OutputTarget::File(path) => {
                let dir = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                let mut temp = tempfile::NamedTempFile::new_in(dir)
                    .with_context(|| format!("Failed to create file in {}", dir.display()))?;
                JsonFormatter::new(temp.as_file_mut(), config.pretty_json)
                    .trailing_newline(config.trailing_newline)
                    .write_records(records)?;
                temp.as_file_mut().flush()?;
                temp.persist(path)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctitab_core::{Catalog, CatalogProcessor, RawTable};
    use tempfile::TempDir;

    fn records() -> CatalogRecords {
        let table = RawTable::new(
            vec!["Gruppenname und Aliase".to_string()],
            vec![vec!["APT28 / Fancy Bear".to_string()]],
        );
        CatalogProcessor::new(Catalog::Apt)
            .process_table(&table)
            .unwrap()
    }

    #[test]
    fn test_target_from_path() {
        assert_eq!(OutputTarget::from_path(Path::new("-")), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_path(Path::new("out.json")),
            OutputTarget::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_file_target_writes_complete_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups_apt.json");

        OutputTarget::File(path.clone())
            .write(&records(), &OutputConfig::default())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n"));
        assert!(content.ends_with("]\n"));
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_target_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("groups_apt.json");
        std::fs::write(&path, "stale").unwrap();

        OutputTarget::File(path.clone())
            .write(
                &records(),
                &OutputConfig {
                    pretty_json: false,
                    trailing_newline: true,
                },
            )
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[{\"group_name\":\"APT28\""));
    }
}
