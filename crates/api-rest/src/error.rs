//! Mapping from core errors to HTTP responses.
//!
//! Every error body is a `MessageRes`. Store faults are logged here with
//! the handler's context and reach the client only as a generic message.

use api_shared::MessageRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use notebook_core::ContentError;

pub const NOT_FOUND_MESSAGE: &str = "Document not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Errors a content handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// A required field was missing or a parameter was out of range (400).
    Validation(String),
    /// No record matches the id or title (404).
    NotFound,
    /// The record store failed (500).
    Internal,
}

impl ApiError {
    /// Classifies a core error, logging store faults under `context`.
    pub fn from_content(context: &str, err: ContentError) -> Self {
        if err.is_validation() {
            tracing::debug!("{} rejected: {}", context, err);
            ApiError::Validation(err.to_string())
        } else if err.is_not_found() {
            ApiError::NotFound
        } else {
            tracing::error!("{} error: {:?}", context, err);
            ApiError::Internal
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unreadable request bodies (bad JSON, wrong field types, missing
/// `Content-Type`) are reported as validation errors in the usual body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {}", rejection.body_text());
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(message) => message,
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
        };
        (status, Json(MessageRes::new(message))).into_response()
    }
}
