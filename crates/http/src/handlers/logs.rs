use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use std::sync::Arc;

use pilltrack_core::{CreateLogOutcome, PillLog, PillLogWithName};

use crate::api_error::ApiError;
use crate::query_types::{CreateLogRequest, LogRangeQuery};
use crate::response_types::DeleteLogResponse;
use crate::AppState;

/// `GET /api/logs?startDate&endDate` — logs in the inclusive date range,
/// newest first, each with its pill's name.
pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogRangeQuery>,
) -> Result<Json<Vec<PillLogWithName>>, ApiError> {
    let (start, end) = query.parsed().map_err(ApiError::BadRequest)?;
    let logs = state
        .store
        .logs_in_range(start, end)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch logs", e))?;
    Ok(Json(logs))
}

/// `POST /api/logs` — mark a pill as given on a date. A second create for
/// the same `(pillId, date)` pair is a 409, not a new row.
pub async fn create_log(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLogRequest>,
) -> Result<(StatusCode, Json<PillLog>), ApiError> {
    let (pill_id, date) = req.validated().map_err(ApiError::BadRequest)?;
    match state.store.create_log(pill_id, date, req.given_by()).await {
        Ok(CreateLogOutcome::Created(log)) => Ok((StatusCode::CREATED, Json(log))),
        Ok(CreateLogOutcome::AlreadyExists) => {
            Err(ApiError::Conflict("Log already exists for this pill on this date"))
        },
        Err(e) => Err(ApiError::internal("Failed to create log", e)),
    }
}

/// `DELETE /api/logs/{pillId}/{date}` — unmark a pill as given.
pub async fn delete_log(
    State(state): State<Arc<AppState>>,
    Path((pill_id, date)): Path<(i64, NaiveDate)>,
) -> Result<Json<DeleteLogResponse>, ApiError> {
    match state.store.delete_log(pill_id, date).await {
        Ok(log) => Ok(Json(DeleteLogResponse { message: "Log deleted successfully", log })),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound("Log not found")),
        Err(e) => Err(ApiError::internal("Failed to delete log", e)),
    }
}
