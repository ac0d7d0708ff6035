use crate::ProviderError;
use bytes::Bytes;
use linkdrop_models::ProviderKind;

/// One file-hosting backend and the upload protocol it speaks
#[async_trait::async_trait]
pub trait HostingProvider: Send + Sync {
    /// Which backend this is
    fn kind(&self) -> ProviderKind;

    /// Whether `upload` makes use of the caller's hint
    fn accepts_hint(&self) -> bool {
        false
    }

    /// Uploads the payload in a single request and returns the raw link the
    /// provider handed back. No retries, no logging.
    async fn upload(
        &self,
        filename: &str,
        payload: Bytes,
        hint: Option<&str>,
    ) -> Result<String, ProviderError>;
}
