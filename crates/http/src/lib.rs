//! HTTP API server for pilltrack.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::routing::{delete, get, put};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use pilltrack_storage::PillStore;

pub use api_error::ApiError;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds the single pooled store; no other state is shared across requests.
pub struct AppState {
    /// PostgreSQL-backed store for pills and logs.
    pub store: PillStore,
}

/// Build the router: two resource endpoints, health/version, permissive
/// CORS, and JSON error bodies for unknown paths and unsupported methods.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/pills",
            get(handlers::pills::list_pills)
                .post(handlers::pills::create_pill)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/pills/{id}",
            put(handlers::pills::update_pill).fallback(method_not_allowed),
        )
        .route(
            "/api/logs",
            get(handlers::logs::list_logs)
                .post(handlers::logs::create_log)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/logs/{pillId}/{date}",
            delete(handlers::logs::delete_log).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Not found")
}
