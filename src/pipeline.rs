//! Sequential per-file ingestion with per-file error accumulation.
//!
//! One call handles one upload request. Files are processed in order, never
//! concurrently, so a failure cannot be misattributed and total work stays
//! bounded by the surrounding request timeout. A failing file records an
//! error and processing continues with the next one; there is no cross-file
//! transaction.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{IngestError, IngestResult};
use crate::ingestion::observability::{
    severity_for_error, FileContext, FileStats, IngestObserver, IngestSeverity,
};
use crate::ingestion::{parse_upload, UploadFormat};
use crate::store::RowSink;
use crate::types::AccountId;

/// One uploaded file: declared filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Declared filename; its extension selects the parser.
    pub name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Options controlling upload processing.
#[derive(Clone, Default)]
pub struct UploadOptions {
    /// Optional observer for per-file outcomes.
    pub observer: Option<Arc<dyn IngestObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Option<IngestSeverity>,
}

/// Aggregated result of one upload request.
///
/// The external HTTP layer serializes this into its response shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadOutcome {
    /// True when at least one row from at least one file was inserted.
    pub ok: bool,
    /// Total rows inserted across all files.
    pub inserted: u64,
    /// Ordered per-file error messages (`"{filename}: {message}"`).
    pub errors: Vec<String>,
}

/// Ingest every file of one upload request, sequentially.
///
/// The raw tenant id is validated first; a non-finite value fails the whole
/// request with [`IngestError::InvalidTenant`] before any file is touched.
/// Each file then runs parse → filter → batch insert independently: parse
/// failures, empty parses, and storage failures are recorded per file and do
/// not abort the remaining files. The fold yields the total inserted count
/// and the ordered error list.
pub async fn ingest_upload<S: RowSink + ?Sized>(
    sink: &S,
    raw_account_id: f64,
    files: Vec<UploadFile>,
    options: &UploadOptions,
) -> IngestResult<UploadOutcome> {
    let account = AccountId::from_raw(raw_account_id)?;

    let mut inserted = 0u64;
    let mut errors = Vec::new();
    for file in files {
        let ctx = FileContext {
            file: file.name.clone(),
            format: UploadFormat::from_filename(&file.name),
        };
        match ingest_file(sink, account, file).await {
            Ok(rows) => {
                inserted += rows;
                notify_success(options, &ctx, rows);
            }
            Err(e) => {
                notify_failure(options, &ctx, &e);
                errors.push(format!("{}: {e}", ctx.file));
            }
        }
    }

    tracing::debug!(
        account = account.get(),
        inserted,
        failed = errors.len(),
        "upload processed"
    );

    Ok(UploadOutcome {
        ok: inserted > 0,
        inserted,
        errors,
    })
}

/// Parse one file and persist its rows as a single batch.
async fn ingest_file<S: RowSink + ?Sized>(
    sink: &S,
    account: AccountId,
    file: UploadFile,
) -> IngestResult<u64> {
    let UploadFile { name, bytes } = file;
    let rows = parse_upload(bytes, &name).await?;
    if rows.is_empty() {
        return Err(IngestError::EmptyParse);
    }
    sink.insert_rows(account, &rows, &name).await
}

fn notify_success(options: &UploadOptions, ctx: &FileContext, rows: u64) {
    if let Some(obs) = options.observer.as_ref() {
        obs.on_file_success(ctx, FileStats { rows });
    }
}

fn notify_failure(options: &UploadOptions, ctx: &FileContext, error: &IngestError) {
    if let Some(obs) = options.observer.as_ref() {
        let severity = severity_for_error(error);
        obs.on_file_failure(ctx, severity, error);
        if let Some(threshold) = options.alert_at_or_above {
            if severity >= threshold {
                obs.on_alert(ctx, severity, error);
            }
        }
    }
}
