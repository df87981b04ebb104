//! Parsers and the unified parse entrypoint.
//!
//! Most callers should use [`parse_upload`] (from [`unified`]), which:
//!
//! - selects the parser from the filename extension (`.csv` / `.xlsx`)
//! - projects each source row onto the unified 18-column schema
//! - drops rows that are entirely empty after coercion
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`excel`]

pub mod csv;
pub mod excel;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileContext, FileStats, IngestObserver, IngestSeverity, StdErrObserver,
    TracingObserver,
};
pub use unified::{parse_upload, UploadFormat};
