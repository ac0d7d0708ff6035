use crate::backend::HostingProvider;
use crate::http::{file_part, non_empty, public_link, read_body};
use crate::ProviderError;
use bytes::Bytes;
use linkdrop_config::EndpointSettings;
use linkdrop_models::ProviderKind;
use linkdrop_utils::{is_absolute_http, last_segment};
use reqwest::multipart::Form;
use std::time::Duration;

const DEFAULT_PUBLIC_BASE: &str = "https://files.catbox.moe/";

/// catbox.moe: multipart POST to the user API.
///
/// The API normally answers with a full link, but may answer with a bare file
/// name; the public link is then rebuilt from `public_base`.
pub struct CatboxProvider {
    client: reqwest::Client,
    endpoint: String,
    public_base: String,
    timeout: Duration,
}

impl CatboxProvider {
    pub fn new(client: reqwest::Client, settings: &EndpointSettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            public_base: settings
                .public_base
                .clone()
                .unwrap_or_else(|| DEFAULT_PUBLIC_BASE.to_string()),
            timeout: settings.timeout(),
        }
    }

    fn public_url(&self, body: &str) -> String {
        if is_absolute_http(body) {
            body.to_string()
        } else {
            public_link(&self.public_base, last_segment(body))
        }
    }
}

#[async_trait::async_trait]
impl HostingProvider for CatboxProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Catbox
    }

    async fn upload(
        &self,
        filename: &str,
        payload: Bytes,
        _hint: Option<&str>,
    ) -> Result<String, ProviderError> {
        let form = Form::new()
            .text("reqtype", "fileupload")
            .part("fileToUpload", file_part(self.kind(), filename, payload)?);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::transport(self.kind(), e))?;

        let body = read_body(self.kind(), response).await?;
        let body = non_empty(self.kind(), &body)?;

        Ok(self.public_url(&body))
    }
}
