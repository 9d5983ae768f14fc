//! Raw table rows
//!
//! The table-location collaborator hands over a header list and the body
//! rows as plain cell text. Rows may be shorter than the header list; the
//! missing cells read as empty.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::text::normalize;

/// Ordered header → cell mapping for one table row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (header, cell) pairs
    pub fn from_pairs<H, C>(pairs: impl IntoIterator<Item = (H, C)>) -> Self
    where
        H: Into<String>,
        C: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(header, cell)| (header.into(), cell.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, header: impl Into<String>, cell: impl Into<String>) {
        self.cells.push((header.into(), cell.into()));
    }

    /// Cell under `header`. A repeated header resolves to its last cell.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(h, _)| h == header)
            .map(|(_, cell)| cell.as_str())
    }

    /// Cell under the first header present, or `""`
    pub fn first_of<'a>(&'a self, headers: &[String]) -> &'a str {
        headers
            .iter()
            .find_map(|header| self.get(header))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(h, c)| (h.as_str(), c.as_str()))
    }
}

/// A located table as handed over by the table-location collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Pair every row with the normalized header list.
    ///
    /// Fails for a table without headers, or for a row with more cells than
    /// there are headers; either means the table was not located correctly.
    pub fn raw_rows(&self) -> Result<Vec<RawRow>> {
        if self.headers.is_empty() {
            return Err(CatalogError::MissingHeaderRow);
        }

        let headers: Vec<String> = self.headers.iter().map(|h| normalize(h)).collect();

        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| {
                if cells.len() > headers.len() {
                    return Err(CatalogError::RowTooWide {
                        row: index,
                        cells: cells.len(),
                        headers: headers.len(),
                    });
                }
                Ok(RawRow::from_pairs(
                    headers.iter().cloned().zip(cells.iter().cloned()),
                ))
            })
            .collect()
    }

    /// Whether any header normalizes to `header`
    pub fn has_header(&self, header: &str) -> bool {
        self.headers.iter().any(|h| normalize(h) == header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_rows_keep_order_and_headers() {
        let rows = table(&["A", "B"], &[&["1", "2"], &["3", "4"]])
            .raw_rows()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("A"), Some("1"));
        assert_eq!(rows[1].get("B"), Some("4"));
    }

    #[test]
    fn test_short_row_reads_empty() {
        let rows = table(&["A", "B"], &[&["1"]]).raw_rows().unwrap();
        assert_eq!(rows[0].get("B"), None);
        assert_eq!(rows[0].first_of(&["B".to_string()]), "");
    }

    #[test]
    fn test_headers_are_normalized() {
        let rows = table(&[" Gruppenname\n und  Aliase "], &[&["APT1"]])
            .raw_rows()
            .unwrap();
        assert_eq!(rows[0].get("Gruppenname und Aliase"), Some("APT1"));
    }

    #[test]
    fn test_missing_header_row() {
        let err = table(&[], &[&["x"]]).raw_rows().unwrap_err();
        assert!(matches!(err, CatalogError::MissingHeaderRow));
    }

    #[test]
    fn test_row_wider_than_headers() {
        let err = table(&["A"], &[&["1"], &["1", "2"]]).raw_rows().unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RowTooWide {
                row: 1,
                cells: 2,
                headers: 1
            }
        ));
    }

    #[test]
    fn test_first_of_prefers_earlier_header() {
        let row = RawRow::from_pairs([("Gruppenname ", "late"), ("Gruppenname", "early")]);
        let candidates = vec!["Gruppenname".to_string(), "Gruppenname ".to_string()];
        assert_eq!(row.first_of(&candidates), "early");
    }

    #[test]
    fn test_repeated_header_last_wins() {
        let mut row = RawRow::new();
        row.insert("A", "first");
        row.insert("A", "second");
        assert_eq!(row.get("A"), Some("second"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_table_deserializes_without_rows() {
        let table: RawTable = serde_json::from_str(r#"{"headers": ["A"]}"#).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.has_header("A"));
    }
}
