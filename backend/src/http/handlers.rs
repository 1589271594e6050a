//! HTTP handlers for the REST API.

use axum::{body::Bytes, http::Uri, Json};
use tracing::{debug, warn};

use super::dto::{HealthResponse, PrettySchedule};
use super::error::AppError;
use crate::error::ValidationError;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// POST /prettify
///
/// Prettify a body holding per-day open/close events, e.g.
/// `{"monday": [{"type": "open", "value": 32400}, {"type": "close", "value": 64800}]}`.
///
/// The response maps every weekday to `"Closed"` or its comma-separated
/// ranges on a 12-hour clock. Any validation failure is a `422`.
pub async fn prettify(body: Bytes) -> HandlerResult<PrettySchedule> {
    let text = std::str::from_utf8(&body).map_err(|e| {
        ValidationError::MalformedInput(format!("request body is not valid UTF-8: {}", e))
    })?;

    match services::prettify_timeslots(text) {
        Ok(pretty) => {
            debug!("Prettified opening hours ({} bytes)", body.len());
            Ok(Json(pretty))
        }
        Err(err) => {
            warn!(code = err.code(), "Rejected opening hours: {}", err);
            Err(err.into())
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
