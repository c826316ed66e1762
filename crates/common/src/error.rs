//! Common error types and handling for Atelier functions

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by every serverless function handler.
///
/// The response body is always `{ "error": <message> }`; upstream failures
/// additionally carry a `details` string with the provider's message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{message}")]
    Upstream { message: String, details: String },

    #[error("{0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl Error {
    /// Upstream provider failure with a user-facing message and the provider's detail
    pub fn upstream(message: impl Into<String>, details: impl ToString) -> Self {
        Error::Upstream {
            message: message.into(),
            details: details.to_string(),
        }
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Upstream { .. }
            | Error::Internal(_)
            | Error::Serialization(_)
            | Error::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Error::Upstream { .. } => "UPSTREAM_ERROR",
            Error::Internal(_) => "INTERNAL_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = self.error_code(), error = ?self, "Function failed");
        }

        let body = match &self {
            Error::Upstream { message, details } => json!({
                "error": message,
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback for function routes called with the wrong HTTP method
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
