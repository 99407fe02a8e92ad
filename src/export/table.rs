//! Fully quoted CSV output

use crate::records::Cell;
use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::path::Path;

/// Write `rows` to a CSV file at `path`, replacing any existing file.
///
/// The header, when given, is written first. Every field is quoted, null
/// cells become `""`, and records end with CRLF.
///
/// Returns the number of data rows written.
pub fn write_rows<I, R>(path: &Path, header: Option<&[&str]>, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[Cell]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    if let Some(header) = header {
        writer
            .write_record(header)
            .with_context(|| format!("Failed to write header to {}", path.display()))?;
    }

    let mut written = 0;
    for row in rows {
        let fields = row.as_ref().iter().map(|cell| cell.as_deref().unwrap_or(""));
        writer
            .write_record(fields)
            .with_context(|| format!("Failed to write row to {}", path.display()))?;
        written += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(written)
}
