use crate::backend::HostingProvider;
use crate::http::{file_part, non_empty, read_body};
use crate::ProviderError;
use bytes::Bytes;
use linkdrop_config::EndpointSettings;
use linkdrop_models::ProviderKind;
use reqwest::header::USER_AGENT;
use reqwest::multipart::Form;
use std::time::Duration;

/// 0x0.st: multipart POST, the response body is the link
pub struct ZeroX0Provider {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
    timeout: Duration,
}

impl ZeroX0Provider {
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
impl HostingProvider for ZeroX0Provider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::ZeroX0
    }

    async fn upload(
        &self,
        filename: &str,
        payload: Bytes,
        _hint: Option<&str>,
    ) -> Result<String, ProviderError> {
        let form = Form::new().part("file", file_part(self.kind(), filename, payload)?);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .header(USER_AGENT, &self.user_agent)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::transport(self.kind(), e))?;

        let body = read_body(self.kind(), response).await?;
        non_empty(self.kind(), &body)
    }
}
