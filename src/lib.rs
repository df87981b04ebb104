//! `production-ingest` normalizes multi-tenant operational report uploads
//! (`.csv` / `.xlsx`) into one unified 18-column schema and persists them to
//! a shared Postgres `production` table, one atomic multi-row insert per
//! file.
//!
//! The primary entrypoint is [`pipeline::ingest_upload`]: it validates the
//! resolved tenant id, then processes each uploaded file sequentially
//! (parse by extension, drop empty rows, batch-insert), accumulating a
//! total inserted count and per-file error messages instead of aborting on
//! the first failure.
//!
//! ## Quick example
//!
//! ```no_run
//! use production_ingest::pipeline::{ingest_upload, UploadFile, UploadOptions};
//! use production_ingest::store::{PgStore, StoreConfig};
//!
//! # async fn run() -> Result<(), production_ingest::IngestError> {
//! let store = PgStore::connect(&StoreConfig::from_env()?).await?;
//! let csv = b"Date,Report Type,Oil BBL\n2024-01-05,Daily,123.4\n".to_vec();
//! let files = vec![UploadFile::new("daily.csv", csv)];
//! let outcome = ingest_upload(&store, 42.0, files, &UploadOptions::default()).await?;
//! println!("inserted={} errors={:?}", outcome.inserted, outcome.errors);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`schema`]: the fixed unified column set
//! - [`types`]: the [`types::UnifiedRow`] record and tenant id
//! - [`coerce`]: date/number coercers (total, never erroring)
//! - [`ingestion`]: format detection, CSV and workbook parsers, observers
//! - [`store`]: pool config, the [`store::RowSink`] seam, Postgres sink
//! - [`pipeline`]: the sequential per-file fold
//!
//! Authentication, HTTP routing, tenant-slug resolution, and response
//! rendering are external collaborators; this crate starts at raw bytes plus
//! a resolved tenant id and ends at persisted rows.

pub mod coerce;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod schema;
pub mod store;
pub mod types;

pub use error::{IngestError, IngestResult};
