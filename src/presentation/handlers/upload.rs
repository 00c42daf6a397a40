use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::ApiError;
use crate::application::ports::{FileLoader, LlmClient, VectorStore};
use crate::application::services::IngestionError;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: &'static str,
    pub chunks: usize,
}

struct UploadedFile {
    filename: String,
    data: Vec<u8>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<F, L, V>(
    State(state): State<AppState<F, L, V>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    V: VectorStore + 'static,
{
    let upload = match multipart {
        Ok(mut multipart) => match read_file_field(&mut multipart).await {
            Ok(upload) => upload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return ApiError::invalid_input(format!("Failed to read upload: {}", e))
                    .into_response();
            }
        },
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Upload request is not multipart");
            None
        }
    };

    let Some(upload) = upload else {
        tracing::warn!("Upload request with no file");
        return ApiError::from(IngestionError::NoFileUploaded).into_response();
    };

    tracing::debug!(filename = %upload.filename, bytes = upload.data.len(), "File data received");

    match state
        .ingestion_service
        .ingest(&upload.data, upload.filename)
        .await
    {
        Ok(chunks) => (
            StatusCode::OK,
            Json(UploadResponse {
                status: "success",
                chunks,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, kind = %e.kind(), "Upload failed");
            ApiError::from(e).into_response()
        }
    }
}

/// Finds the `file` field. A field without a filename counts as no file.
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Ok(None);
        }

        let data = field.bytes().await?;
        return Ok(Some(UploadedFile {
            filename,
            data: data.to_vec(),
        }));
    }

    Ok(None)
}
