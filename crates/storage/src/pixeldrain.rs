use crate::backend::HostingProvider;
use crate::http::{endpoint_with_segment, public_link, read_body};
use crate::ProviderError;
use bytes::Bytes;
use linkdrop_config::EndpointSettings;
use linkdrop_models::ProviderKind;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_PUBLIC_BASE: &str = "https://pixeldrain.com/u/";

/// pixeldrain.com: anonymous PUT, JSON response carrying the file id
pub struct PixeldrainProvider {
    client: reqwest::Client,
    endpoint: String,
    public_base: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct PutFileResponse {
    id: String,
}

impl PixeldrainProvider {
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

    fn parse_response(&self, body: &str) -> Result<String, ProviderError> {
        let response: PutFileResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::parse(self.kind(), format!("invalid JSON: {}", e)))?;

        let id = response.id.trim();
        if id.is_empty() {
            return Err(ProviderError::parse(self.kind(), "empty file id"));
        }

        Ok(public_link(&self.public_base, id))
    }
}

#[async_trait::async_trait]
impl HostingProvider for PixeldrainProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Pixeldrain
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
            .body(payload)
            .send()
            .await
            .map_err(|e| ProviderError::transport(self.kind(), e))?;

        let body = read_body(self.kind(), response).await?;
        self.parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(endpoint: &str) -> PixeldrainProvider {
        let settings = EndpointSettings {
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
            public_base: Some("https://pixeldrain.com/u/".to_string()),
        };
        PixeldrainProvider::new(reqwest::Client::new(), &settings)
    }

    #[tokio::test]
    async fn test_upload_builds_public_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/file/cat.png")
            .match_body("0123456789")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"AbCd1234"}"#)
            .create_async()
            .await;

        let url = provider(&format!("{}/api/file/", server.url()))
            .upload("cat.png", Bytes::from_static(b"0123456789"), None)
            .await
            .unwrap();

        assert_eq!(url, "https://pixeldrain.com/u/AbCd1234");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_id_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/cat.png")
            .with_status(201)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let err = provider(&server.url())
            .upload("cat.png", Bytes::from_static(b"x"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParse { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let provider = provider("https://pixeldrain.com/api/file/");
        assert!(matches!(
            provider.parse_response("<html>oops</html>"),
            Err(ProviderError::ResponseParse { .. })
        ));
        assert!(matches!(
            provider.parse_response(r#"{"id":""}"#),
            Err(ProviderError::ResponseParse { .. })
        ));
    }

    #[tokio::test]
    async fn test_unauthorized_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/cat.png")
            .with_status(401)
            .with_body(r#"{"success":false,"value":"authentication_required"}"#)
            .create_async()
            .await;

        let err = provider(&server.url())
            .upload("cat.png", Bytes::from_static(b"x"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::HttpStatus { status: 401, .. }));
    }
}
