//! HTTP error mapping.
//!
//! The three business-level failures map to fixed status codes and body
//! shapes:
//!
//! | failure        | status | body                                |
//! |----------------|--------|-------------------------------------|
//! | validation     | 400    | `{"errors": ["...", ...]}`          |
//! | missing record | 404    | `{"message": "Contact not found"}`  |
//! | backend fault  | 500    | `{"error": "<driver message>"}`     |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced to HTTP clients.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Client input violated collection rules; one message per rule.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// The addressed record does not exist.
    #[error("Contact not found")]
    NotFound,

    /// Backend unavailable or unexpected failure.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(errors) => ApiError::Validation(errors.into_messages()),
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Backend(message) => ApiError::Storage(message),
        }
    }
}

/// Body for validation failures.
#[derive(Debug, Serialize)]
struct ValidationBody {
    errors: Vec<String>,
}

/// Body for missing-record failures.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

/// Body for backend failures.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => {
                (status, Json(ValidationBody { errors })).into_response()
            }
            ApiError::NotFound => (
                status,
                Json(MessageBody {
                    message: "Contact not found",
                }),
            )
                .into_response(),
            ApiError::Storage(error) => {
                tracing::error!(%error, "storage backend failure");
                (status, Json(ErrorBody { error })).into_response()
            }
        }
    }
}
