//! Pill-related PostgreSQL queries.

use chrono::{DateTime, Utc};
use pilltrack_core::Pill;
use sqlx::PgPool;

use crate::error::{Result, StorageError};

type PillRow = (i64, String, bool, DateTime<Utc>);

pub async fn list_active(pool: &PgPool) -> Result<Vec<Pill>> {
    let rows = sqlx::query_as::<_, PillRow>(
        r#"
        SELECT id, name, active, created_at
        FROM pills
        WHERE active = TRUE
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_pill).collect())
}

pub async fn create(pool: &PgPool, name: &str) -> Result<Pill> {
    let row = sqlx::query_as::<_, PillRow>(
        r#"
        INSERT INTO pills (name, active)
        VALUES ($1, TRUE)
        RETURNING id, name, active, created_at
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(row_to_pill(row))
}

/// Set the `active` flag. Used for both deactivation and reactivation.
pub async fn set_active(pool: &PgPool, id: i64, active: bool) -> Result<Pill> {
    let row = sqlx::query_as::<_, PillRow>(
        r#"
        UPDATE pills
        SET active = $1
        WHERE id = $2
        RETURNING id, name, active, created_at
        "#,
    )
    .bind(active)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(row_to_pill)
        .ok_or_else(|| StorageError::NotFound { entity: "pill", id: id.to_string() })
}

fn row_to_pill(row: PillRow) -> Pill {
    let (id, name, active, created_at) = row;
    Pill { id, name, active, created_at }
}
