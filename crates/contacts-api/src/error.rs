//! Error types for the contacts API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::{DatabaseError, ValidationError};
use thiserror::Error;

/// Errors a contact operation can end in.
///
/// Each variant maps to exactly one HTTP status. Error responses carry no
/// body; details only go to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid input: missing field, bad id, malformed body.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input the store refused as malformed.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Phone number overlaps an existing contact.
    #[error("Phone number {0} conflicts with an existing contact")]
    Conflict(String),

    /// No contact with this id.
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// Any other storage failure.
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(err) => tracing::error!(error = %err, "Storage error"),
            other => tracing::debug!(error = %other, "Request rejected"),
        }

        self.status().into_response()
    }
}

/// Result type for contact operations.
pub type Result<T> = std::result::Result<T, ApiError>;
