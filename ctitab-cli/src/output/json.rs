//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use ctitab_core::CatalogRecords;
use std::io::Write;

/// JSON formatter - outputs records as a JSON array
///
/// Pretty output uses two-space indentation. Non-ASCII text is written as
/// UTF-8, not escaped.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    trailing_newline: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            trailing_newline: true,
        }
    }

    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_records(&mut self, records: &CatalogRecords) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, records)?;
        } else {
            serde_json::to_writer(&mut self.writer, records)?;
        }
        if self.trailing_newline {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
