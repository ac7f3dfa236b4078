//! Schema migrations — creates tables/indexes on startup (idempotent).

use sqlx::PgPool;

use crate::error::{Result, StorageError};

/// Run all schema migrations. Safe to call on every boot.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pills (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create pills: {e}")))?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pill_logs (
            id BIGSERIAL PRIMARY KEY,
            pill_id BIGINT NOT NULL REFERENCES pills(id),
            date DATE NOT NULL,
            given_by TEXT NOT NULL DEFAULT 'User',
            timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE (pill_id, date)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create pill_logs: {e}")))?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_pills_active_created ON pills(created_at DESC) WHERE active",
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("index pills: {e}")))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_pill_logs_date ON pill_logs(date DESC)")
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(format!("index pill_logs: {e}")))?;

    tracing::info!("schema migrations completed");
    Ok(())
}
