//! # HTTP Errors
//!
//! Total mapping from request failure to HTTP status and a uniform
//! `{"error": <message>}` body. Handlers return `ApiError` and never
//! inspect store internals.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event};
use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed JSON payload or path identifier
    #[error("{0}")]
    Validation(String),

    /// Target id is absent from the store
    #[error("{0}")]
    NotFound(String),

    /// The store call itself failed
    #[error("{0}")]
    Persistence(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(message),
            StoreError::Persistence(_) => ApiError::Persistence(message),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let event = if status.is_server_error() {
            Event::RequestFailed
        } else {
            Event::RequestRejected
        };
        let message = self.to_string();
        log_event_with_fields(
            event,
            &[("status", status.as_str()), ("error", message.as_str())],
        );

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
