use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockdesk_core::DomainError;

pub fn domain_error_to_response(err: &DomainError) -> axum::response::Response {
    let status = match err {
        DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    json_error(status, err.code(), err.to_string())
}

/// Malformed bodies (bad JSON, wrong field types, missing content type) are
/// reported like any other invalid input.
pub fn json_rejection_to_response(rejection: &JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_input", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
