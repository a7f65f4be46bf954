//! Error responses for failures the visitor cannot fix.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Log the failure and answer 500. Details stay in the log; the page body
/// never carries backend internals.
pub fn internal_error(operation: &'static str, err: &dyn std::fmt::Display) -> Response {
    tracing::error!(operation, error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
