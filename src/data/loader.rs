use std::collections::HashSet;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};
use thiserror::Error;

use super::model::{CellValue, Column, Table};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure modes of dataset loading.  All are recoverable by the caller;
/// the loader never panics across the boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The extension hint names a format this loader does not read.
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    /// The bytes could not be parsed as the hinted format.
    #[error("failed to parse dataset: {0}")]
    ParseFailure(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse raw upload bytes into a [`Table`].  Dispatch by extension hint,
/// no content sniffing.
///
/// Supported formats:
/// * `.csv`           – delimited text, first record is the header row
/// * `.xlsx` / `.xls` – first worksheet of an Excel workbook
pub fn load(bytes: &[u8], extension: &str) -> Result<Table, LoadError> {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();

    let table = match ext.as_str() {
        "csv" => load_csv(bytes)?,
        "xlsx" | "xls" => load_excel(bytes)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    log::debug!(
        "parsed {} rows x {} columns from .{ext}",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::ParseFailure(format!("reading header row: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(LoadError::ParseFailure("dataset has no columns".into()));
    }

    let names = dedupe_names(headers);
    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| LoadError::ParseFailure(format!("row {row_no}: {e}")))?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.push(guess_cell_value(field.trim()));
        }
    }

    let columns = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Table::new(columns))
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, …
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut suffix = 0usize;
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{name}.{suffix}");
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

/// Guess the typed value of a single raw field.
fn guess_cell_value(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

/// Read the first worksheet of an `.xlsx` / `.xls` workbook held in memory.
fn load_excel(bytes: &[u8]) -> Result<Table, LoadError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| LoadError::ParseFailure(format!("opening workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::ParseFailure("workbook has no worksheets".into()))?
        .map_err(|e| LoadError::ParseFailure(format!("reading worksheet: {e}")))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| LoadError::ParseFailure("worksheet is empty".into()))?;
    let names = dedupe_names(header_row.iter().map(header_text).collect());

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (column, cell) in columns.iter_mut().zip(row.iter()) {
            column.push(excel_cell_value(cell));
        }
    }

    let columns = names
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    Ok(Table::new(columns))
}

fn header_text(cell: &Data) -> String {
    cell.as_string()
        .unwrap_or_else(|| cell.to_string())
        .trim()
        .to_string()
}

/// Map one worksheet cell onto a [`CellValue`].  String cells run through
/// the same guesser as CSV fields so both formats classify identically.
fn excel_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Int(i) => CellValue::Integer(*i),
        // Whole floats demote to integers so a whole-number column gets the
        // same dtype from either format.
        Data::Float(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => {
            CellValue::Integer(*f as i64)
        }
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::String(s) => guess_cell_value(s.trim()),
        Data::DateTime(_) => CellValue::Text(cell.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}
