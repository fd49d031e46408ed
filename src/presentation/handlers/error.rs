use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::FileServiceError;
use crate::domain::FileId;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(super) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub(super) fn parse_file_id(raw: &str) -> Result<FileId, Response> {
    raw.parse::<FileId>()
        .map_err(|message| error_response(StatusCode::BAD_REQUEST, message))
}

/// Every per-file failure surfaces as 404; only storage failures are 500.
/// Error detail goes to the log, never into the body.
pub(super) fn file_error_response(error: FileServiceError) -> Response {
    match error {
        FileServiceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "File not found"),
        FileServiceError::ExtractionFailed(_) => error_response(
            StatusCode::NOT_FOUND,
            "Unable to extract content from the file.",
        ),
        FileServiceError::SummarizationFailed { .. } => {
            tracing::error!(error = %error, "Summarization failed");
            error_response(StatusCode::NOT_FOUND, "Failed to generate summary.")
        }
        FileServiceError::Repository(e) => {
            tracing::error!(error = %e, "Failed to access file records");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access file records.",
            )
        }
    }
}

pub async fn route_not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
