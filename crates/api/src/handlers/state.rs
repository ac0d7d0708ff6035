use super::models::AppState;
use linkdrop_uploader::Uploader;
use std::sync::Arc;

impl AppState {
    /// `default_mode` and `default_expiry` fill in whatever a request leaves out
    pub fn new(uploader: Uploader, default_mode: String, default_expiry: String) -> Self {
        Self {
            uploader,
            default_mode: Arc::new(default_mode),
            default_expiry: Arc::new(default_expiry),
        }
    }
}
