//! Delimited-text parser for `.csv` report uploads.

use std::collections::HashMap;

use crate::error::IngestResult;
use crate::schema::UNIFIED_COLUMNS;
use crate::types::{RawCell, UnifiedRow};

/// Parse a CSV byte buffer into unified rows.
///
/// Rules:
///
/// - Bytes are decoded as UTF-8 (lossily; ill-formed sequences are replaced).
/// - The first non-blank line is the header. Each unified column is resolved
///   to its header index by case-sensitive exact match; columns absent from
///   the header stay null for every row.
/// - Fields are split on the literal comma. There is **no** quoted-field or
///   escape handling: a field containing an embedded comma will misalign the
///   rest of its line. Known simplification, kept deliberately.
/// - Values are trimmed, coerced per column kind, and rows that are entirely
///   empty after coercion are dropped.
///
/// The whole file is materialized before returning; inputs are assumed small
/// enough to hold in memory.
pub fn parse_csv(bytes: &[u8], source_file: &str) -> IngestResult<Vec<UnifiedRow>> {
    let text = String::from_utf8_lossy(bytes);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_owned()).collect();

    // Unified column name -> positional index in this file's header.
    let mut col_idx: HashMap<&'static str, usize> = HashMap::new();
    for name in UNIFIED_COLUMNS {
        if let Some(i) = headers.iter().position(|h| h == name) {
            col_idx.insert(name, i);
        }
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row = UnifiedRow::from_cells(
            |name| {
                let i = *col_idx.get(name)?;
                let raw = record.get(i)?.trim();
                (!raw.is_empty()).then(|| RawCell::Text(raw.to_owned()))
            },
            source_file,
        );
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}
