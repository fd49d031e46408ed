use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::FileRecord;
use crate::presentation::state::AppState;

use super::error::{file_error_response, parse_file_id};

#[derive(Serialize)]
pub struct FileResponse {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub format: String,
    pub size: i64,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id.as_i64(),
            name: record.name,
            path: record.path,
            format: record.format,
            size: record.size,
        }
    }
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct ContentResponse {
    pub content: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_files_handler<L>(State(state): State<AppState<L>>) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    match state.record_accessor.list_files().await {
        Ok(records) => {
            let files: Vec<FileResponse> = records.into_iter().map(FileResponse::from).collect();
            (StatusCode::OK, Json(files)).into_response()
        }
        Err(e) => file_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn file_summary_handler<L>(
    State(state): State<AppState<L>>,
    Path(file_id): Path<String>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let id = match parse_file_id(&file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.record_accessor.get_summary(id).await {
        Ok(summary) => (StatusCode::OK, Json(SummaryResponse { summary })).into_response(),
        Err(e) => file_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn file_content_handler<L>(
    State(state): State<AppState<L>>,
    Path(file_id): Path<String>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
{
    let id = match parse_file_id(&file_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.record_accessor.get_content(id).await {
        Ok(content) => (StatusCode::OK, Json(ContentResponse { content })).into_response(),
        Err(e) => file_error_response(e),
    }
}
