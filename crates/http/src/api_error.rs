//! Typed API error for HTTP handlers.
//!
//! Converts storage and validation failures into HTTP responses with a JSON
//! `{"error": message}` body. Handlers return `Result<Json<T>, ApiError>`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` carries the fixed client-facing message for the failed
/// operation plus the real error, which is logged server-side and never
/// returned to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — a required field is missing or malformed.
    BadRequest(String),
    /// 404 Not Found — update/delete target absent, or unknown path.
    NotFound(&'static str),
    /// 409 Conflict — a log already exists for this pill and date.
    Conflict(&'static str),
    /// 405 Method Not Allowed — unsupported verb on a known path.
    MethodNotAllowed,
    /// 500 Internal Server Error — database or unexpected failure.
    Internal { message: &'static str, source: anyhow::Error },
}

impl ApiError {
    /// Build an `Internal` error from any lower-layer failure, keeping the
    /// operation's fixed message for the response body.
    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { message, source: source.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_owned()),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg.to_owned()),
            Self::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_owned())
            },
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, context = message, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_status_and_body() {
        let resp = ApiError::BadRequest("Pill name is required".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "Pill name is required");
    }

    #[tokio::test]
    async fn test_conflict_status_and_body() {
        let resp =
            ApiError::Conflict("Log already exists for this pill on this date").into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(resp).await["error"], "Log already exists for this pill on this date");
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let resp = ApiError::NotFound("Pill not found").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["error"], "Pill not found");
    }

    #[tokio::test]
    async fn test_method_not_allowed_body() {
        let resp = ApiError::MethodNotAllowed.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(resp).await["error"], "Method not allowed");
    }

    #[tokio::test]
    async fn test_internal_hides_source_detail() {
        let resp = ApiError::internal(
            "Failed to fetch pills",
            anyhow::anyhow!("connection refused (127.0.0.1:5432)"),
        )
        .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Failed to fetch pills");
        assert!(!body["error"].as_str().unwrap().contains("5432"));
    }
}
