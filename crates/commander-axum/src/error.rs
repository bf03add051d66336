//! Axum-specific error types and mappings.
//!
//! This module provides error types for the Axum adapter and mappings
//! from `RepositoryError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use commander_core::RepositoryError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found. Surfaced as 404 with an empty body.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field constraint failed on an input or post-patch DTO.
    #[error("Validation failed on field '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Bad request (malformed patch document, unknown op or path).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error (store faults, never swallowed).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// The field whose constraint failed, for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, field) = match self {
            // Contract: 404 carries no body.
            HttpError::NotFound(_) => return StatusCode::NOT_FOUND.into_response(),
            HttpError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, message, Some(field))
            }
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            field,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
        }
    }
}
