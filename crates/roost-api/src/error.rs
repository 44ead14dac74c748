//! HTTP error mapping.
//!
//! Every failure reaching the HTTP boundary becomes a JSON body with an
//! `error` field and the matching status code. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug)]
pub enum ApiError {
    /// Storage or other internal failure; logged, surfaced as 500.
    Internal(roost_core::Error),
    Unauthorized(String),
    NotFound(String),
    BadRequest(String),
}

impl From<roost_core::Error> for ApiError {
    fn from(err: roost_core::Error) -> Self {
        match err {
            roost_core::Error::Validation(msg) => ApiError::BadRequest(msg),
            roost_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
