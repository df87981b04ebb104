use std::fmt;
use std::sync::Arc;

use crate::error::IngestError;

use super::unified::UploadFormat;

/// Severity classification used for observer callbacks and alert thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestSeverity {
    /// Informational event.
    Info,
    /// Non-fatal event (e.g. a file with no usable rows).
    Warning,
    /// The file failed to parse.
    Error,
    /// Infrastructure failure (storage or decode task).
    Critical,
}

/// Context about one file within an upload request.
#[derive(Debug, Clone)]
pub struct FileContext {
    /// Declared filename of the upload.
    pub file: String,
    /// Detected format, when the extension was recognized.
    pub format: Option<UploadFormat>,
}

/// Minimal stats reported when a file is ingested successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// Rows inserted from this file.
    pub rows: u64,
}

/// Observer interface for per-file ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestObserver: Send + Sync {
    /// Called when a file's rows are persisted.
    fn on_file_success(&self, _ctx: &FileContext, _stats: FileStats) {}

    /// Called when a file fails to parse or persist.
    fn on_file_failure(&self, _ctx: &FileContext, _severity: IngestSeverity, _error: &IngestError) {
    }

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_file_failure`].
    fn on_alert(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        self.on_file_failure(ctx, severity, error)
    }
}

/// Severity of a per-file failure, for observer reporting.
pub(crate) fn severity_for_error(e: &IngestError) -> IngestSeverity {
    match e {
        IngestError::Storage(_) | IngestError::Decode(_) => IngestSeverity::Critical,
        IngestError::EmptyParse => IngestSeverity::Warning,
        _ => IngestSeverity::Error,
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestObserver for CompositeObserver {
    fn on_file_success(&self, ctx: &FileContext, stats: FileStats) {
        for o in &self.observers {
            o.on_file_success(ctx, stats);
        }
    }

    fn on_file_failure(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        for o in &self.observers {
            o.on_file_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs per-file outcomes to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl IngestObserver for StdErrObserver {
    fn on_file_success(&self, ctx: &FileContext, stats: FileStats) {
        eprintln!(
            "[ingest][ok] format={:?} file={} rows={}",
            ctx.format, ctx.file, stats.rows
        );
    }

    fn on_file_failure(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        eprintln!(
            "[ingest][{:?}] format={:?} file={} err={}",
            severity, ctx.format, ctx.file, error
        );
    }

    fn on_alert(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        eprintln!(
            "[ALERT][ingest][{:?}] format={:?} file={} err={}",
            severity, ctx.format, ctx.file, error
        );
    }
}

/// Emits per-file outcomes as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestObserver for TracingObserver {
    fn on_file_success(&self, ctx: &FileContext, stats: FileStats) {
        tracing::info!(file = %ctx.file, format = ?ctx.format, rows = stats.rows, "file ingested");
    }

    fn on_file_failure(&self, ctx: &FileContext, severity: IngestSeverity, error: &IngestError) {
        match severity {
            IngestSeverity::Warning => {
                tracing::warn!(file = %ctx.file, format = ?ctx.format, %error, "file skipped");
            }
            _ => {
                tracing::error!(file = %ctx.file, format = ?ctx.format, %error, "file failed");
            }
        }
    }
}
