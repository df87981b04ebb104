//! Postgres-backed row sink using sqlx.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::error::IngestResult;
use crate::schema::{COLUMN_COUNT, UNIFIED_COLUMNS};
use crate::types::{AccountId, Cell, UnifiedRow};

use super::{RowSink, StoreConfig};

/// Bound parameters per row: account_id + 18 columns + source_file.
const PARAMS_PER_ROW: usize = COLUMN_COUNT + 2;

/// Postgres-backed store for the shared `production` table.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a bounded pool using the given configuration.
    pub async fn connect(config: &StoreConfig) -> IngestResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout)
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool (useful for tests and shared pools).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip liveness probe: returns the database server time.
    pub async fn health(&self) -> IngestResult<DateTime<Utc>> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT now()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}

#[async_trait]
impl RowSink for PgStore {
    async fn insert_rows(
        &self,
        account: AccountId,
        rows: &[UnifiedRow],
        source_file: &str,
    ) -> IngestResult<u64> {
        if rows.is_empty() {
            return Ok(0);
        }

        let sql = insert_sql(rows.len());
        let params = collect_params(account, rows, source_file);
        debug_assert_eq!(params.len(), rows.len() * PARAMS_PER_ROW);

        tracing::debug!(
            rows = rows.len(),
            params = params.len(),
            file = source_file,
            "executing batch insert"
        );

        let mut query = sqlx::query(&sql);
        for param in params {
            query = match param {
                BindValue::Int(v) => query.bind(v),
                BindValue::Text(v) => query.bind(v),
                BindValue::Number(v) => query.bind(v),
            };
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

/// One value awaiting positional binding.
#[derive(Debug, Clone, Copy, PartialEq)]
enum BindValue<'a> {
    Int(i64),
    Text(Option<&'a str>),
    Number(Option<f64>),
}

/// Build the multi-row insert statement.
///
/// Placeholders are offset by `row_index * PARAMS_PER_ROW` so positions never
/// collide across rows; one execution inserts the whole batch atomically.
fn insert_sql(row_count: usize) -> String {
    let col_list = UNIFIED_COLUMNS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let mut sql = format!("INSERT INTO production (account_id, {col_list}, source_file) VALUES ");
    for row in 0..row_count {
        if row > 0 {
            sql.push_str(", ");
        }
        let offset = row * PARAMS_PER_ROW;
        let placeholders = (1..=PARAMS_PER_ROW)
            .map(|j| format!("${}", offset + j))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push('(');
        sql.push_str(&placeholders);
        sql.push(')');
    }
    sql
}

/// Flatten rows into the bind list matching [`insert_sql`]'s placeholder
/// order: `(account_id, 18 column values, source_file)` per row.
fn collect_params<'a>(
    account: AccountId,
    rows: &'a [UnifiedRow],
    source_file: &'a str,
) -> Vec<BindValue<'a>> {
    let mut params = Vec::with_capacity(rows.len() * PARAMS_PER_ROW);
    for row in rows {
        params.push(BindValue::Int(account.get()));
        for cell in row.cells() {
            params.push(match cell {
                Cell::Text(v) => BindValue::Text(v),
                Cell::Number(v) => BindValue::Number(v),
            });
        }
        params.push(BindValue::Text(Some(source_file)));
    }
    params
}
