use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub added: usize,
    pub skipped: usize,
}

#[tracing::instrument(skip(state))]
pub async fn refresh_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    match state.scanner.scan(&state.upload_folder).await {
        Ok(report) => (
            StatusCode::OK,
            Json(RefreshResponse {
                message: "Files processed successfully.".to_string(),
                added: report.added,
                skipped: report.skipped,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, folder = %state.upload_folder.display(), "Scan failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process files.")
        }
    }
}
