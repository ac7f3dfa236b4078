//! PostgreSQL storage for pilltrack.
//!
//! One pooled connection handle, created at process start and shared across
//! requests. Every operation is a single parameterized statement running in
//! its own implicit transaction; the only cross-request invariant is the
//! `UNIQUE (pill_id, date)` constraint on logs.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(unused_results, reason = "SQL execute() returns row counts which are often unused")]
#![allow(clippy::needless_raw_string_hashes, reason = "SQL strings use raw for readability")]

mod error;
mod log_queries;
mod migrations;
mod pill_queries;

pub use error::{Result, StorageError};

use chrono::NaiveDate;
use pilltrack_core::{CreateLogOutcome, Pill, PillLog, PillLogWithName, PG_POOL_MAX_CONNECTIONS};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Pool-owning facade over the pill and log tables.
pub struct PillStore {
    pool: PgPool,
}

impl PillStore {
    /// Connect to PostgreSQL and verify the connection with a probe query.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;
        tracing::info!("database connected");

        Ok(Self { pool })
    }

    /// Create tables and indexes if missing. Idempotent, run on every boot.
    pub async fn run_migrations(&self) -> Result<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// All active pills, newest first.
    pub async fn list_active_pills(&self) -> Result<Vec<Pill>> {
        pill_queries::list_active(&self.pool).await
    }

    /// Insert a pill with the given (already trimmed) name, `active = TRUE`.
    pub async fn create_pill(&self, name: &str) -> Result<Pill> {
        pill_queries::create(&self.pool, name).await
    }

    /// Set a pill's `active` flag; `NotFound` when no row matches `id`.
    pub async fn set_pill_active(&self, id: i64, active: bool) -> Result<Pill> {
        pill_queries::set_active(&self.pool, id, active).await
    }

    /// Logs in `[start, end]` inclusive, `date` descending, with pill names.
    pub async fn logs_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PillLogWithName>> {
        log_queries::list_in_range(&self.pool, start, end).await
    }

    /// Insert a log; a duplicate `(pill_id, date)` is a no-op reported as
    /// [`CreateLogOutcome::AlreadyExists`].
    pub async fn create_log(
        &self,
        pill_id: i64,
        date: NaiveDate,
        given_by: &str,
    ) -> Result<CreateLogOutcome> {
        log_queries::create(&self.pool, pill_id, date, given_by).await
    }

    /// Delete the log for `(pill_id, date)`, returning the removed row;
    /// `NotFound` when none existed.
    pub async fn delete_log(&self, pill_id: i64, date: NaiveDate) -> Result<PillLog> {
        log_queries::delete(&self.pool, pill_id, date).await
    }
}
