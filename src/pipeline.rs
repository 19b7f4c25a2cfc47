// src/pipeline.rs

use crate::error::Result;
use crate::fetch::{fetch_document, ArchiveSource};
use crate::process::{parse_section, SectionSelector};
use crate::write::{output_target, write_table};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Section title line as found in the document.
    pub title: String,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Fetch → locate section → convert → write, for one selector.
///
/// Nothing is written unless fetching and parsing both succeed.
#[instrument(level = "info", skip(source, selector, base_dir), fields(section = selector.label()))]
pub fn run(
    source: &dyn ArchiveSource,
    selector: &SectionSelector,
    base_dir: &Path,
) -> Result<RunReport> {
    let start = Instant::now();

    info!("Downloading Fama-French 12 industry returns");
    let doc = fetch_document(source)?;
    info!(entry = %doc.entry_name, lines = doc.lines.len(), "archive decoded");

    let table = parse_section(&doc.lines, selector)?;

    let path = output_target(base_dir, selector);
    write_table(&table, &path)?;

    info!(elapsed = ?start.elapsed(), path = %path.display(), "run complete");
    Ok(RunReport {
        rows: table.len(),
        columns: table.columns.len(),
        title: table.title,
        path,
    })
}
