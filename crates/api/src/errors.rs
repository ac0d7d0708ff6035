use axum::{
    http::StatusCode,
    response::{IntoResponse, Response, Json},
};
use linkdrop_uploader::UploadError;
use thiserror::Error;

use crate::models::{ErrorResponse, ErrorDetail};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    UploadFailed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidRequest(msg) => ApiError::InvalidRequest(msg),
            err @ UploadError::Exhausted { .. } => ApiError::UploadFailed(err.to_string()),
            err => ApiError::UploadFailed(format!("upload failed: {}", err)),
        }
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ApiError::FileNotFound(_) => (StatusCode::NOT_FOUND, "FILE_NOT_FOUND"),
            ApiError::UploadFailed(_) => (StatusCode::BAD_GATEWAY, "UPLOAD_FAILED"),
            ApiError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match self {
            ApiError::UploadFailed(msg) => msg,
            other => other.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdrop_models::ProviderKind;

    #[test]
    fn test_upload_error_mapping() {
        let err = ApiError::from(UploadError::InvalidRequest("filename must not be empty".into()));
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let err = ApiError::from(UploadError::Exhausted {
            attempts: 1,
            last: Some(Box::new(UploadError::NotAccessible {
                provider: ProviderKind::Catbox,
                url: "https://files.catbox.moe/x.png".into(),
            })),
        });
        assert_eq!(
            err.to_string(),
            "upload failed: catbox: uploaded but not accessible: https://files.catbox.moe/x.png"
        );
        assert_eq!(err.status_and_code(), (StatusCode::BAD_GATEWAY, "UPLOAD_FAILED"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::FileNotFound("a".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InternalError("a".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InvalidRequest("a".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
