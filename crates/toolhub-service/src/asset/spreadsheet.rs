//! In-memory spreadsheet reading.
//!
//! Workbook formats are recognised by their container signature and read with
//! calamine; anything else is parsed as CSV. Only the first sheet is read and
//! its first row supplies the column names.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use toolhub_core::error::AppError;
use toolhub_core::result::AppResult;

/// Zip container (xlsx, xlsm, xlsb, ods).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// OLE compound document (legacy xls).
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A single cell, keeping the distinction between text and other values.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Dates, durations and error cells, rendered as text.
    Other(String),
    Empty,
}

impl CellValue {
    /// The cell as an asset URL: a text value starting with `http`.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Text(text) if text.starts_with("http") => Some(text),
            _ => None,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::String(text) => Self::Text(text.clone()),
            Data::Float(number) => Self::Number(*number),
            Data::Int(number) => Self::Number(*number as f64),
            Data::Bool(flag) => Self::Bool(*flag),
            Data::Empty => Self::Empty,
            other => Self::Other(other.to_string()),
        }
    }
}

/// One data row keyed by column name. Missing cells have no entry.
pub type SheetRow = HashMap<String, CellValue>;

/// Reads the first sheet of a workbook or CSV payload into rows.
pub fn read_rows(data: &[u8]) -> AppResult<Vec<SheetRow>> {
    let rows = if data.starts_with(ZIP_MAGIC) || data.starts_with(OLE_MAGIC) {
        read_workbook(data)?
    } else {
        read_csv(data)?
    };
    debug!(rows = rows.len(), bytes = data.len(), "Spreadsheet parsed");
    Ok(rows)
}

fn unreadable(detail: impl std::fmt::Display) -> AppError {
    AppError::validation(format!("Spreadsheet could not be parsed: {detail}"))
}

fn read_workbook(data: &[u8]) -> AppResult<Vec<SheetRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data)).map_err(unreadable)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unreadable("workbook has no sheets"))?
        .map_err(unreadable)?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    Ok(rows
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, cell)| (header.clone(), CellValue::from(cell)))
                .collect()
        })
        .collect())
}

fn read_csv(data: &[u8]) -> AppResult<Vec<SheetRow>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .filter(|(header, _)| !header.is_empty())
                .map(|(header, value)| {
                    let cell = if value.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(value.to_string())
                    };
                    (header.clone(), cell)
                })
                .collect(),
        );
    }
    Ok(rows)
}
