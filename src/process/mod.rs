// src/process/mod.rs

pub mod convert;
pub mod raw_table;
pub mod selector;

use crate::error::{Error, Result};
use tracing::{debug, info, instrument};

pub use convert::convert_to_fractions;
pub use raw_table::{ParsedTable, RawTable, Row, DATE_COLUMN};
pub use selector::{Period, SectionSelector, Weighting, SECTION_TITLES};

/// Why the data-row scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Blank line: the normal end of a section.
    BlankLine,
    /// Field count differs from the header.
    ShortRow,
    /// Some field was empty after trimming.
    EmptyField,
    /// Ran off the end of the document.
    EndOfDocument,
}

/// Rows accepted by [`scan_rows`] and the condition that ended the scan.
#[derive(Debug, Clone, PartialEq)]
pub struct RowScan {
    pub rows: Vec<Vec<String>>,
    pub stop: StopReason,
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

/// Index of the first line whose trimmed content starts with `label`.
pub fn find_section<S: AsRef<str>>(lines: &[S], label: &str) -> Option<usize> {
    lines
        .iter()
        .position(|l| l.as_ref().trim().starts_with(label))
}

/// Accumulate data rows of `width` fields until a stop condition.
pub fn scan_rows<S: AsRef<str>>(lines: &[S], width: usize) -> RowScan {
    let mut rows = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            return RowScan {
                rows,
                stop: StopReason::BlankLine,
            };
        }
        let fields = split_fields(line);
        if fields.len() != width {
            return RowScan {
                rows,
                stop: StopReason::ShortRow,
            };
        }
        if fields.iter().any(|f| f.is_empty()) {
            return RowScan {
                rows,
                stop: StopReason::EmptyField,
            };
        }
        rows.push(fields);
    }

    RowScan {
        rows,
        stop: StopReason::EndOfDocument,
    }
}

/// Locate `label` in `lines` and read its header and data rows.
///
/// The first header column is renamed to [`DATE_COLUMN`]. Fails with
/// `SectionNotFound` when no line carries the label, and with `EmptyTable`
/// when the section has no header line or no accepted row.
#[instrument(level = "info", skip(lines), fields(lines = lines.len()))]
pub fn extract_section<S: AsRef<str>>(lines: &[S], label: &str) -> Result<RawTable> {
    let title_idx =
        find_section(lines, label).ok_or_else(|| Error::SectionNotFound(label.to_string()))?;
    let title = lines[title_idx].as_ref().trim().to_string();
    info!("Section found: {}", title);

    let header_line = lines
        .get(title_idx + 1)
        .ok_or_else(|| Error::EmptyTable(label.to_string()))?;
    let mut headers = split_fields(header_line.as_ref());
    headers[0] = DATE_COLUMN.to_string();

    let scan = scan_rows(&lines[title_idx + 2..], headers.len());
    debug!(rows = scan.rows.len(), stop = ?scan.stop, "section scan finished");
    if scan.rows.is_empty() {
        return Err(Error::EmptyTable(label.to_string()));
    }

    Ok(RawTable {
        title,
        headers,
        rows: scan.rows,
    })
}

/// Full extractor: resolve the selector, pull the section, convert percentages.
pub fn parse_section<S: AsRef<str>>(lines: &[S], selector: &SectionSelector) -> Result<ParsedTable> {
    let raw = extract_section(lines, selector.label())?;
    let table = convert_to_fractions(raw)?;
    info!(
        rows = table.len(),
        columns = table.columns.len(),
        "parsed section"
    );
    Ok(table)
}
