//! Export endpoints

use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ExportDefaults, ExportRequestBody, Json};
use crate::domain::{ExportFile, ExportOutcome};

pub const RECORD_COUNT_HEADER: &str = "x-record-count";

/// Values the UI pre-fills into its form
pub async fn get_defaults(State(state): State<AppState>) -> Json<ExportDefaults> {
    Json(state.defaults.as_ref().clone())
}

/// Run an export and stream the file back as an attachment
pub async fn create_export(
    State(state): State<AppState>,
    Json(body): Json<ExportRequestBody>,
) -> Result<Response, ApiError> {
    let request = body.into_request(&state.defaults);

    match state.export_service.export(request).await? {
        ExportOutcome::File(file) => {
            info!(
                records = file.record_count,
                file_name = %file.file_name,
                "Successfully fetched {} records",
                file.record_count
            );
            Ok(file_response(file))
        }
        ExportOutcome::Empty => Err(ApiError::no_records()),
    }
}

fn file_response(file: ExportFile) -> Response {
    let headers = [
        (header::CONTENT_TYPE, file.mime_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.file_name),
        ),
        (
            HeaderName::from_static(RECORD_COUNT_HEADER),
            file.record_count.to_string(),
        ),
    ];

    (StatusCode::OK, headers, Bytes::from(file.bytes)).into_response()
}
