// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// Every variant carries a detail string for logging; the wire body is the
/// fixed `{success, error, message}` shape the frontend expects, so the
/// detail never leaks to clients.
#[derive(Debug)]
pub enum ApiError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found (empty result set or missing row)
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed(String),

    // 422 Unprocessable (a write or lookup-then-act sequence failed)
    Unprocessable(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ApiError {}

/// Implements `IntoResponse` for `ApiError`.
/// Converts the error into the uniform JSON error body with the
/// appropriate HTTP status code.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApiError::BadRequest(detail) => {
                tracing::debug!("Bad request: {}", detail);
                (StatusCode::BAD_REQUEST, "Bad Request")
            }
            ApiError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                (StatusCode::NOT_FOUND, "resource not found")
            }
            ApiError::MethodNotAllowed(detail) => {
                tracing::debug!("Method not allowed: {}", detail);
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
            }
            ApiError::Unprocessable(detail) => {
                tracing::warn!("Unprocessable: {}", detail);
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
        };
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `ApiError::InternalServerError`.
/// Allows using `?` operator on database queries. Handlers whose contract
/// maps database failures to 422 override this with an explicit `map_err`.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}
