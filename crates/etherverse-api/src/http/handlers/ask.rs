//! Chat proxy endpoint.
//!
//! POST /api/ask - Forward one chat message to the upstream conversational API.

use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, Uri};
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use etherverse_types::error::AskError;

use crate::http::error::ApiError;
use crate::state::AppState;

/// POST /api/ask - Relay `{message, sessionId?, context?}` upstream.
///
/// The body is read as raw bytes so a missing-message response can echo it
/// back exactly, and so an unparseable body is reported as an internal error
/// rather than an extractor rejection.
pub async fn ask(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7();

    info!(
        %request_id,
        %method,
        %uri,
        timestamp = %chrono::Utc::now().to_rfc3339(),
        "Incoming ask request"
    );

    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(
            %request_id,
            error = %e,
            timestamp = %chrono::Utc::now().to_rfc3339(),
            "Failed to parse ask request body"
        );
        AskError::Internal(format!("invalid JSON body: {e}"))
    })?;

    let result = state.ask_service.ask(body).await;

    info!(
        %request_id,
        ok = result.is_ok(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Ask request finished"
    );

    Ok(Json(result?))
}
