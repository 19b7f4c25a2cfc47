// src/process/convert.rs

use crate::error::{Error, Result};
use crate::process::raw_table::{ParsedTable, RawTable, Row};

/// Turn every non-date cell from a percentage into a fraction.
///
/// Unlike the row-level stop conditions, a cell that does not parse is a hard error.
pub fn convert_to_fractions(raw: RawTable) -> Result<ParsedTable> {
    let RawTable {
        title,
        headers,
        rows,
    } = raw;
    let mut out = Vec::with_capacity(rows.len());

    for (row_idx, fields) in rows.into_iter().enumerate() {
        let mut fields = fields.into_iter();
        let date = fields.next().unwrap_or_default();

        let mut values = Vec::with_capacity(headers.len().saturating_sub(1));
        for (col_idx, cell) in fields.enumerate() {
            let pct: f64 = cell.parse().map_err(|_| Error::NumericConversion {
                row: row_idx,
                column: headers[col_idx + 1].clone(),
                value: cell.clone(),
            })?;
            values.push(pct / 100.0);
        }
        out.push(Row { date, values });
    }

    Ok(ParsedTable {
        title,
        columns: headers,
        rows: out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> RawTable {
        RawTable {
            title: "Average Value Weighted Returns -- Monthly".into(),
            headers: vec!["date".into(), "B".into(), "C".into()],
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn divides_by_hundred() {
        let table = convert_to_fractions(raw(&[&["192607", "-99.99", "1.5"]])).unwrap();
        assert_eq!(table.title, "Average Value Weighted Returns -- Monthly");
        assert_eq!(table.rows[0].date, "192607");
        assert!((table.rows[0].values[0] + 0.9999).abs() < 1e-12);
        assert!((table.rows[0].values[1] - 0.015).abs() < 1e-12);
    }

    #[test]
    fn names_the_offending_cell() {
        let err = convert_to_fractions(raw(&[&["2020", "1", "2"], &["2021", "3", "n/a"]]))
            .unwrap_err();
        match err {
            Error::NumericConversion { row, column, value } => {
                assert_eq!(row, 1);
                assert_eq!(column, "C");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
