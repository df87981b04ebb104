use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Error type returned across parsing, validation, and persistence.
///
/// Coercion helpers never produce errors (invalid values coerce to null);
/// everything that can actually fail funnels through this enum.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Delimited-text parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook decode error (corrupt or truncated `.xlsx` bytes).
    #[error("workbook error: {0}")]
    Excel(#[from] calamine::XlsxError),

    /// The background workbook decode task failed to complete.
    #[error("workbook decode task failed: {0}")]
    Decode(#[from] tokio::task::JoinError),

    /// Batch insert or connection failure from the storage layer.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Missing or unusable runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The resolved tenant/account id is not a finite number. Fatal for the
    /// whole request, surfaced before any file is processed.
    #[error("account id is not a finite number: {0}")]
    InvalidTenant(String),

    /// A file yielded zero usable rows after coercion and filtering.
    #[error("no valid rows found")]
    EmptyParse,

    /// The filename extension maps to no supported format.
    #[error("unsupported file extension: {0}")]
    UnsupportedFormat(String),
}
