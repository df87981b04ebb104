//! Persistence layer: pool configuration and the row sink seam.
//!
//! The pipeline talks to storage only through [`RowSink`], so tests can
//! substitute an in-memory sink. [`PgStore`] is the Postgres implementation.

mod postgres;

pub use postgres::PgStore;

use std::env;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{IngestError, IngestResult};
use crate::types::{AccountId, UnifiedRow};

/// Connection settings for the shared `production` table.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Postgres connection URL.
    pub database_url: String,
    /// Bounded concurrent-connection ceiling.
    pub max_connections: u32,
    /// Idle connections are evicted after this long.
    pub idle_timeout: Duration,
}

impl StoreConfig {
    /// Config with the default pool bounds.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            idle_timeout: Duration::from_secs(10),
        }
    }

    /// Read the connection URL from `DATABASE_URL`.
    pub fn from_env() -> IngestResult<Self> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| IngestError::Config("DATABASE_URL not set".to_owned()))?;
        Ok(Self::new(url))
    }
}

/// Destination for validated unified rows.
///
/// One call persists one file's rows as a single atomic batch: either every
/// row lands or none do. Implementations must release any acquired
/// connection on both success and failure paths.
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Append `rows` tagged with `account` and `source_file` in one
    /// statement. Returns the number of rows inserted; an empty slice is a
    /// no-op returning 0.
    async fn insert_rows(
        &self,
        account: AccountId,
        rows: &[UnifiedRow],
        source_file: &str,
    ) -> IngestResult<u64>;
}
