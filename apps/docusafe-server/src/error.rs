//! Error types for the DocuSafe server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const UNEXTRACTABLE_MESSAGE: &str =
    "Unable to extract text from this file. Please upload a text-searchable PDF or Word document.";

pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "File exceeds the maximum upload size.";

pub const INTERNAL_MESSAGE: &str =
    "Unexpected error while analyzing document. Please try again with another file.";

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing file in request")]
    MissingFile,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// Extraction failed or produced no text; the detail is logged only
    #[error("Could not extract text: {0}")]
    Unextractable(String),

    #[error("Text extraction timeout after {0}ms")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::MissingFile => (
                StatusCode::BAD_REQUEST,
                "MISSING_FILE",
                "Missing file in request.".to_string(),
            ),
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::PayloadTooLarge(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
            ),
            ServerError::Unextractable(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNEXTRACTABLE_DOCUMENT",
                UNEXTRACTABLE_MESSAGE.to_string(),
            ),
            ServerError::Timeout(ms) => (
                StatusCode::REQUEST_TIMEOUT,
                "TIMEOUT",
                format!("Text extraction timed out after {}ms", ms),
            ),
            ServerError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            ),
        };

        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<text_extract::ExtractionError> for ServerError {
    fn from(err: text_extract::ExtractionError) -> Self {
        ServerError::Unextractable(err.to_string())
    }
}
