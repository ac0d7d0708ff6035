use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub modes: Vec<String>,
    pub auto_order: Vec<String>,
    pub default_mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Query string of the raw upload route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    pub mode: Option<String>,
    pub expiry: Option<String>,
    /// Extension appended to the filename when it is missing
    pub ext: Option<String>,
}

/// Body of `POST /upload-path`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadPathRequest {
    pub path: String,
    pub filename: Option<String>,
    pub mode: Option<String>,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
