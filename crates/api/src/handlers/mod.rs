mod models;
mod state;
mod upload;
mod providers;

pub use models::AppState;
pub use upload::{upload_bytes, upload_path};
pub use providers::{health, list_providers};
