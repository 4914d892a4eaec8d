//! Application error type mapping domain errors to HTTP status codes and the
//! JSON bodies chat clients expect.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use etherverse_types::ask::{MISSING_MESSAGE, RATE_LIMIT_CODE, RATE_LIMIT_MESSAGE};
use etherverse_types::error::{AskError, CatalogError};

/// Message shown when the curated-list document cannot be loaded.
pub const CATALOG_UNAVAILABLE: &str = "Failed to load the awesome list from GitHub";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Ask proxy errors.
    Ask(AskError),
    /// Curated-list loading errors.
    Catalog(CatalogError),
}

impl From<AskError> for ApiError {
    fn from(e: AskError) -> Self {
        ApiError::Ask(e)
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        ApiError::Catalog(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Ask(AskError::MissingMessage { received_body }) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "message": MISSING_MESSAGE,
                    "receivedBody": received_body,
                }),
            ),
            ApiError::Ask(AskError::RateLimited) => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({
                    "message": RATE_LIMIT_MESSAGE,
                    "error": RATE_LIMIT_CODE,
                    "status": 429,
                }),
            ),
            ApiError::Ask(e @ AskError::Upstream { status, body, .. }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({
                    "message": e.client_message(),
                    "error": body,
                }),
            ),
            ApiError::Ask(AskError::Internal(details)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "message": "Internal server error",
                    "details": details,
                    "type": "INTERNAL_ERROR",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }),
            ),
            ApiError::Catalog(e) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "message": CATALOG_UNAVAILABLE,
                    "error": e.to_string(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use super::*;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn upstream_error_keeps_status_and_text() {
        let (status, body) = render(ApiError::Ask(AskError::Upstream {
            status: 418,
            reason: "I'm a teapot".to_string(),
            body: "short and stout".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::IM_A_TEAPOT);
        assert_eq!(body["message"], "Rukh API error: 418 I'm a teapot");
        assert_eq!(body["error"], "short and stout");
    }

    #[tokio::test]
    async fn internal_error_has_timestamp() {
        let (status, body) = render(ApiError::Ask(AskError::Internal("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["type"], "INTERNAL_ERROR");
        assert_eq!(body["details"], "boom");
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
    }

    #[tokio::test]
    async fn catalog_error_is_bad_gateway() {
        let (status, body) = render(ApiError::Catalog(CatalogError::Status(404))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], CATALOG_UNAVAILABLE);
    }
}
