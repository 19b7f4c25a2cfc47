// src/process/raw_table.rs

/// Name the first (period key) column always gets, whatever the source header says.
pub const DATE_COLUMN: &str = "date";

/// A section as it appears in the file: trimmed header fields and trimmed string rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// The matched section title line, trimmed.
    pub title: String,
    /// Column names from the line after the section title; `headers[0]` is `DATE_COLUMN`.
    pub headers: Vec<String>,
    /// Accepted data rows, each with exactly `headers.len()` non-empty fields.
    pub rows: Vec<Vec<String>>,
}

/// One converted row: the untouched period key plus one fraction per data column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub date: String,
    pub values: Vec<f64>,
}

/// A section after percentage → fraction conversion, in source row order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ParsedTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of column `name`, or `None` for unknown names and for the date column.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        if idx == 0 {
            return None;
        }
        Some(self.rows.iter().map(|r| r.values[idx - 1]).collect())
    }

    pub fn dates(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.date.as_str()).collect()
    }
}
