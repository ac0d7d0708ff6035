use linkdrop_models::ProviderKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{provider}: request failed: {message}")]
    Transport {
        provider: ProviderKind,
        message: String,
    },

    #[error("{provider}: HTTP {status}: {body}")]
    HttpStatus {
        provider: ProviderKind,
        status: u16,
        body: String,
    },

    #[error("{provider}: unexpected response: {reason}")]
    ResponseParse {
        provider: ProviderKind,
        reason: String,
    },

    #[error("{provider}: invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        provider: ProviderKind,
        endpoint: String,
        reason: String,
    },

    #[error("{provider}: invalid payload: {reason}")]
    InvalidPayload {
        provider: ProviderKind,
        reason: String,
    },

    #[error("HTTP client initialization failed: {0}")]
    ClientBuild(String),
}

impl ProviderError {
    pub fn transport(provider: ProviderKind, err: reqwest::Error) -> Self {
        ProviderError::Transport {
            provider,
            message: err.to_string(),
        }
    }

    pub fn parse(provider: ProviderKind, reason: impl Into<String>) -> Self {
        ProviderError::ResponseParse {
            provider,
            reason: reason.into(),
        }
    }
}
