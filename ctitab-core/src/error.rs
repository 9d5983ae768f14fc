//! Layered error types
//!
//! Per-row parsing is total and never produces one of these. They cover the
//! batch-level failures: a rule configuration that cannot be loaded, or a
//! table that cannot be turned into rows at all.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Rule configuration could not be parsed or failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// A configured pattern does not compile
    #[error("invalid rule pattern '{pattern}': {source}")]
    Rule {
        /// The pattern as written in the configuration
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The located table carries no header row
    #[error("table has no header row")]
    MissingHeaderRow,

    /// A body row has more cells than the table has headers
    #[error("row {row} has {cells} cells but the table has {headers} headers")]
    RowTooWide {
        /// Zero-based body row index
        row: usize,
        /// Number of cells in the row
        cells: usize,
        /// Number of headers in the table
        headers: usize,
    },

    /// Unsupported catalog code
    #[error("catalog '{code}' not supported")]
    UnknownCatalog {
        /// The catalog code that is not supported
        code: String,
    },

    /// I/O error while reading a rule file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Config(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CatalogError>;
