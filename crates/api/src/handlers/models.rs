use linkdrop_uploader::Uploader;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub(super) uploader: Uploader,
    pub(super) default_mode: Arc<String>,
    pub(super) default_expiry: Arc<String>,
}
