mod errors;
mod models;
mod orchestrator;
mod probe;

pub use errors::UploadError;
pub use models::Uploader;
pub use probe::{AccessProbe, HttpProbe};
