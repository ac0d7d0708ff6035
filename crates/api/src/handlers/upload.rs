use super::models::AppState;
use crate::errors::ApiError;
use crate::models::{UploadPathRequest, UploadQuery, UploadResponse};
use axum::{
    extract::{rejection::JsonRejection, Path as AxumPath, Query, State},
    response::Json,
};
use bytes::Bytes;
use linkdrop_filesystem::FileSystem;
use linkdrop_models::UploadRequest;
use linkdrop_utils::with_extension;

const DEFAULT_STEM: &str = "file";

/// `POST /upload/:filename`, the request body is the payload
pub async fn upload_bytes(
    State(state): State<AppState>,
    AxumPath(filename): AxumPath<String>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> Result<Json<UploadResponse>, ApiError> {
    let filename = match query.ext.as_deref() {
        Some(ext) => with_extension(&filename, DEFAULT_STEM, ext),
        None => filename,
    };

    let request = build_request(&state, filename, body, query.mode, query.expiry);
    upload(&state, request).await
}

/// `POST /upload-path`, reads a local file and uploads it
pub async fn upload_path(
    State(state): State<AppState>,
    payload: Result<Json<UploadPathRequest>, JsonRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    if body.path.trim().is_empty() {
        return Err(ApiError::InvalidRequest("path must not be empty".to_string()));
    }
    if !FileSystem::is_file(&body.path).await {
        return Err(ApiError::FileNotFound(body.path));
    }

    let file = FileSystem::read_payload(&body.path)
        .await
        .map_err(|e| ApiError::InternalError(format!("{:#}", e)))?;

    let filename = match body.filename.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => file.filename,
    };

    let request = build_request(&state, filename, file.bytes, body.mode, body.expiry);
    upload(&state, request).await
}

fn build_request(
    state: &AppState,
    filename: String,
    payload: Bytes,
    mode: Option<String>,
    expiry: Option<String>,
) -> UploadRequest {
    UploadRequest::new(filename, payload)
        .with_mode(mode.unwrap_or_else(|| state.default_mode.to_string()))
        .with_hint(expiry.unwrap_or_else(|| state.default_expiry.to_string()))
}

async fn upload(state: &AppState, request: UploadRequest) -> Result<Json<UploadResponse>, ApiError> {
    let url = state.uploader.upload(&request).await?;

    tracing::info!("Uploaded {} ({} bytes) -> {}", request.filename(), request.size(), url);

    Ok(Json(UploadResponse {
        url,
        filename: request.filename().to_string(),
        size: request.size(),
    }))
}
