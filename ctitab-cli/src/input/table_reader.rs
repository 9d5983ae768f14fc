//! Located-table reading
//!
//! A located table is stored as JSON:
//!
//! ```json
//! {"headers": ["Gruppenname", "Beschreibung"], "rows": [["LockBit", "..."]]}
//! ```

use anyhow::{Context, Result};
use ctitab_core::RawTable;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

/// Reader for located tables
pub struct TableReader;

impl TableReader {
    /// Read a table from a file, or from stdin when the path is `-`
    pub fn read(path: &Path) -> Result<RawTable> {
        let content = if path.as_os_str() == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read table from stdin")?;
            buffer
        } else {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
        };

        Self::parse(&content)
    }

    /// Parse table JSON
    pub fn parse(content: &str) -> Result<RawTable> {
        let table: RawTable = serde_json::from_str(content)
            .map_err(|e| CliError::InvalidTable(e.to_string()))?;
        log::debug!(
            "Read table with {} headers and {} rows",
            table.headers.len(),
            table.rows.len()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_table_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("table.json");
        fs::write(
            &file_path,
            r#"{"headers": ["Gruppenname"], "rows": [["Conti"], []]}"#,
        )
        .unwrap();

        let table = TableReader::read(&file_path).unwrap();
        assert_eq!(table.headers, vec!["Gruppenname"]);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows[1].is_empty());
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = TableReader::read(Path::new("/nonexistent/table.json"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("File not found"));
    }

    #[test]
    fn test_parse_rejects_non_table() {
        let err = TableReader::parse(r#"[1, 2, 3]"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid input table:"));
    }

    #[test]
    fn test_parse_utf8_cells() {
        let table = TableReader::parse(
            r#"{"headers": ["Wirtschaftszweig in Deutschland nach WZ 2008"], "rows": [["Tätigkeiten"]]}"#,
        )
        .unwrap();
        assert_eq!(table.rows[0][0], "Tätigkeiten");
    }
}
