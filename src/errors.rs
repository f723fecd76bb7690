// errors.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors a request handler can surface to the caller
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed input, carries field-level detail from the validation layer
    #[error("validation failed")]
    Validation(#[from] ValidationErrors),

    /// Unexpected failure; the string is the generic message shown to the
    /// caller, internal detail is logged at the failure site only
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::Internal(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": detail })),
            )
                .into_response(),
        }
    }
}
