//! Format detection and the single parse entrypoint.
//!
//! The external upload layer validates file count, extension, and auth before
//! the core sees bytes; [`parse_upload`] still refuses unknown extensions
//! rather than guessing.

use crate::error::{IngestError, IngestResult};
use crate::types::UnifiedRow;

use super::{csv, excel};

/// Accepted upload formats, selected by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    /// Comma-separated values (`.csv`).
    Csv,
    /// Packaged spreadsheet workbook (`.xlsx`).
    Xlsx,
}

impl UploadFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            _ => None,
        }
    }

    /// Detect the format from a full filename.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }
}

/// Parse one uploaded file into unified rows, dispatching on its extension.
///
/// The workbook path suspends during decode; the CSV path completes
/// synchronously. Either way the full row set is materialized before return.
pub async fn parse_upload(bytes: Vec<u8>, filename: &str) -> IngestResult<Vec<UnifiedRow>> {
    match UploadFormat::from_filename(filename) {
        Some(UploadFormat::Csv) => csv::parse_csv(&bytes, filename),
        Some(UploadFormat::Xlsx) => excel::parse_xlsx(bytes, filename).await,
        None => Err(IngestError::UnsupportedFormat(filename.to_owned())),
    }
}
