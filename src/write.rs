// src/write.rs

use crate::error::{Error, Result};
use crate::process::{ParsedTable, Row, SectionSelector};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Subdirectory under the base output directory.
pub const OUTPUT_SUBDIR: &str = "FF_Ind_Rtn";

/// `<base>/FF_Ind_Rtn/FF_Ind_Rtn_<months>_<weighting>.csv`
pub fn output_target(base_dir: impl AsRef<Path>, selector: &SectionSelector) -> PathBuf {
    base_dir.as_ref().join(OUTPUT_SUBDIR).join(format!(
        "{}_{}_{}.csv",
        OUTPUT_SUBDIR,
        selector.period.months(),
        selector.weighting
    ))
}

fn output_err(path: &Path) -> impl Fn(csv::Error) -> Error + '_ {
    move |source| Error::Output {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `table` as comma-separated text to `path`, creating parent directories.
///
/// Rows go to a hidden sibling file first which is renamed over `path` once
/// fully flushed; on failure the sibling is removed and `path` is untouched.
pub fn write_table(table: &ParsedTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| output_err(path)(e.into()))?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table.csv".to_string());
    let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

    if let Err(e) = write_rows(table, &tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(output_err(path)(e));
    }
    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        output_err(path)(e.into())
    })?;

    info!(path = %path.display(), rows = table.len(), "wrote table");
    Ok(())
}

fn write_rows(table: &ParsedTable, path: &Path) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&table.columns)?;

    let mut record = Vec::with_capacity(table.columns.len());
    for row in &table.rows {
        record.clear();
        record.push(row.date.clone());
        record.extend(row.values.iter().map(|v| v.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    debug!(path = %path.display(), "flushed temporary output");
    Ok(())
}

/// Read a file produced by [`write_table`] back into a table. Values are taken
/// as already-converted fractions.
pub fn read_table(path: &Path) -> Result<ParsedTable> {
    let to_err = output_err(path);
    let mut rdr = csv::Reader::from_path(path).map_err(&to_err)?;
    let columns: Vec<String> = rdr
        .headers()
        .map_err(&to_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record.map_err(&to_err)?;
        let date = record.get(0).unwrap_or_default().to_string();
        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for (col_idx, cell) in record.iter().enumerate().skip(1) {
            let v = cell.parse().map_err(|_| Error::NumericConversion {
                row: row_idx,
                column: columns.get(col_idx).cloned().unwrap_or_default(),
                value: cell.to_string(),
            })?;
            values.push(v);
        }
        rows.push(Row { date, values });
    }

    // the title line is not part of the written file
    Ok(ParsedTable {
        title: String::new(),
        columns,
        rows,
    })
}
