use linkdrop_models::ProviderKind;
use linkdrop_storage::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("{provider}: uploaded but not accessible: {url}")]
    NotAccessible { provider: ProviderKind, url: String },

    #[error("upload failed: {}", describe_last(.last))]
    Exhausted {
        attempts: usize,
        last: Option<Box<UploadError>>,
    },

    #[error("Invalid upload request: {0}")]
    InvalidRequest(String),
}

impl UploadError {
    /// The failure of the final attempt, when the error is an exhaustion
    pub fn last_cause(&self) -> Option<&UploadError> {
        match self {
            UploadError::Exhausted { last, .. } => last.as_deref(),
            _ => None,
        }
    }
}

fn describe_last(last: &Option<Box<UploadError>>) -> String {
    match last {
        Some(err) => err.to_string(),
        None => "no provider could be tried".to_string(),
    }
}
