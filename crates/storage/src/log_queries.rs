//! Log-related PostgreSQL queries.

use chrono::{DateTime, NaiveDate, Utc};
use pilltrack_core::{CreateLogOutcome, PillLog, PillLogWithName};
use sqlx::PgPool;

use crate::error::{Result, StorageError};

type LogRow = (i64, i64, NaiveDate, String, DateTime<Utc>);
type LogWithNameRow = (i64, i64, NaiveDate, String, DateTime<Utc>, String);

/// Logs whose date lies in `[start, end]` (inclusive), newest date first,
/// each joined with the owning pill's name.
pub async fn list_in_range(
    pool: &PgPool,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<PillLogWithName>> {
    let rows = sqlx::query_as::<_, LogWithNameRow>(
        r#"
        SELECT pl.id, pl.pill_id, pl.date, pl.given_by, pl.timestamp, p.name
        FROM pill_logs pl
        JOIN pills p ON pl.pill_id = p.id
        WHERE pl.date >= $1 AND pl.date <= $2
        ORDER BY pl.date DESC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_log_with_name).collect())
}

/// Insert a log, relying on the `UNIQUE (pill_id, date)` constraint for
/// duplicate handling: a conflicting insert is a no-op and reports
/// `AlreadyExists` instead of an error.
pub async fn create(
    pool: &PgPool,
    pill_id: i64,
    date: NaiveDate,
    given_by: &str,
) -> Result<CreateLogOutcome> {
    let row = sqlx::query_as::<_, LogRow>(
        r#"
        INSERT INTO pill_logs (pill_id, date, given_by)
        VALUES ($1, $2, $3)
        ON CONFLICT (pill_id, date) DO NOTHING
        RETURNING id, pill_id, date, given_by, timestamp
        "#,
    )
    .bind(pill_id)
    .bind(date)
    .bind(given_by)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some(row) => CreateLogOutcome::Created(row_to_log(row)),
        None => CreateLogOutcome::AlreadyExists,
    })
}

/// Hard-delete the log for `(pill_id, date)`, returning the removed row.
pub async fn delete(pool: &PgPool, pill_id: i64, date: NaiveDate) -> Result<PillLog> {
    let row = sqlx::query_as::<_, LogRow>(
        r#"
        DELETE FROM pill_logs
        WHERE pill_id = $1 AND date = $2
        RETURNING id, pill_id, date, given_by, timestamp
        "#,
    )
    .bind(pill_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    row.map(row_to_log).ok_or_else(|| StorageError::NotFound {
        entity: "log",
        id: format!("{pill_id}/{date}"),
    })
}

fn row_to_log(row: LogRow) -> PillLog {
    let (id, pill_id, date, given_by, timestamp) = row;
    PillLog { id, pill_id, date, given_by, timestamp }
}

fn row_to_log_with_name(row: LogWithNameRow) -> PillLogWithName {
    let (id, pill_id, date, given_by, timestamp, pill_name) = row;
    PillLogWithName { id, pill_id, date, given_by, timestamp, pill_name }
}
