// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Every variant renders the same fixed JSON body for its status; the carried
/// detail is logged and never sent to the client.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 422 Unprocessable Entity
    Unprocessable(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the status.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad request",
            AppError::NotFound(_) => "resource not found",
            AppError::MethodNotAllowed => "method not allowed",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::InternalServerError(_) => "server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into `{success: false, error: <code>, message: <text>}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
            }
            AppError::MethodNotAllowed => {}
            AppError::BadRequest(detail)
            | AppError::NotFound(detail)
            | AppError::Unprocessable(detail) => {
                tracing::warn!(status = status.as_u16(), "{}", detail);
            }
        }

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

/// Handler for paths that match no route.
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound("no route for path".to_string())
}

/// Handler for known paths hit with an unsupported method.
pub async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed
}
