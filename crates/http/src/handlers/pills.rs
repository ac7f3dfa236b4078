use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use pilltrack_core::Pill;

use crate::api_error::ApiError;
use crate::query_types::{CreatePillRequest, UpdatePillRequest};
use crate::AppState;

/// `GET /api/pills` — active pills, newest first.
pub async fn list_pills(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Pill>>, ApiError> {
    let pills = state
        .store
        .list_active_pills()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch pills", e))?;
    Ok(Json(pills))
}

/// `POST /api/pills` — create a pill from a trimmed, non-empty name.
pub async fn create_pill(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePillRequest>,
) -> Result<(StatusCode, Json<Pill>), ApiError> {
    let name = req.trimmed_name().map_err(ApiError::BadRequest)?;
    let pill = state
        .store
        .create_pill(name)
        .await
        .map_err(|e| ApiError::internal("Failed to create pill", e))?;
    Ok((StatusCode::CREATED, Json(pill)))
}

/// `PUT /api/pills/{id}` — deactivate or reactivate a pill.
pub async fn update_pill(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePillRequest>,
) -> Result<Json<Pill>, ApiError> {
    match state.store.set_pill_active(id, req.active).await {
        Ok(pill) => Ok(Json(pill)),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound("Pill not found")),
        Err(e) => Err(ApiError::internal("Failed to update pill", e)),
    }
}
