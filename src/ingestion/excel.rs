//! Spreadsheet parser for `.xlsx` report uploads.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::IngestResult;
use crate::schema::UNIFIED_COLUMNS;
use crate::types::{RawCell, UnifiedRow};

/// Parse an `.xlsx` byte buffer into unified rows.
///
/// Decoding a workbook is staged decompression plus XML parsing, so the work
/// runs on the blocking pool and the call suspends until it completes.
///
/// Behavior:
///
/// - Only the first worksheet is read; additional sheets are ignored.
/// - A workbook with zero worksheets yields an empty result, not an error.
/// - Row 1 is the header; rich-text header cells are read as their plain-text
///   form, other cells stringified, all trimmed.
/// - Missing cells are null. Unmapped columns stay null. The same coercion
///   and emptiness filter as the CSV parser apply.
pub async fn parse_xlsx(bytes: Vec<u8>, source_file: &str) -> IngestResult<Vec<UnifiedRow>> {
    let name = source_file.to_owned();
    tokio::task::spawn_blocking(move || parse_xlsx_blocking(&bytes, &name)).await?
}

fn parse_xlsx_blocking(bytes: &[u8], source_file: &str) -> IngestResult<Vec<UnifiedRow>> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Ok(Vec::new());
    };
    let range = workbook.worksheet_range(&sheet)?;

    let mut row_iter = range.rows();
    let Some(header_row) = row_iter.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    // Unified column name -> positional index in the header row.
    let mut col_idx: HashMap<&'static str, usize> = HashMap::new();
    for name in UNIFIED_COLUMNS {
        if let Some(i) = headers.iter().position(|h| h == name) {
            col_idx.insert(name, i);
        }
    }

    let mut rows = Vec::new();
    for sheet_row in row_iter {
        let row = UnifiedRow::from_cells(
            |name| sheet_row.get(*col_idx.get(name)?).and_then(raw_cell),
            source_file,
        );
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Header cell as trimmed text. calamine flattens rich text runs into
/// `Data::String`, which covers the structured-header case.
fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_owned(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::Error(e) => format!("{e:?}"),
    }
}

/// Convert a data cell into a raw value, or `None` for empty/error cells.
fn raw_cell(cell: &Data) -> Option<RawCell> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| RawCell::Text(t.to_owned()))
        }
        Data::Float(f) => Some(RawCell::Number(*f)),
        Data::Int(i) => Some(RawCell::Number(*i as f64)),
        Data::Bool(b) => Some(RawCell::Text(b.to_string())),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ts) => Some(RawCell::Timestamp(ts)),
            None => Some(RawCell::Number(dt.as_f64())),
        },
    }
}
