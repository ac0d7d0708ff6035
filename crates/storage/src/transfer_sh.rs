use crate::backend::HostingProvider;
use crate::http::{endpoint_with_segment, read_body};
use crate::ProviderError;
use bytes::Bytes;
use linkdrop_config::EndpointSettings;
use linkdrop_models::ProviderKind;
use reqwest::header::USER_AGENT;
use std::time::Duration;

/// transfer.sh: PUT to `/{filename}`, the first token of the body is the link
pub struct TransferShProvider {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
    timeout: Duration,
}

impl TransferShProvider {
    pub fn new(client: reqwest::Client, settings: &EndpointSettings, user_agent: &str) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            user_agent: user_agent.to_string(),
            timeout: settings.timeout(),
        }
    }
}

#[async_trait::async_trait]
impl HostingProvider for TransferShProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TransferSh
    }

    async fn upload(
        &self,
        filename: &str,
        payload: Bytes,
        _hint: Option<&str>,
    ) -> Result<String, ProviderError> {
        let url = endpoint_with_segment(self.kind(), &self.endpoint, filename)?;

        let response = self
            .client
            .put(url)
            .timeout(self.timeout)
            .header(USER_AGENT, &self.user_agent)
            .body(payload)
            .send()
            .await
            .map_err(|e| ProviderError::transport(self.kind(), e))?;

        let body = read_body(self.kind(), response).await?;

        // The body may carry extra tokens (e.g. a deletion link) after the URL
        body.split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::parse(self.kind(), "empty response body"))
    }
}
