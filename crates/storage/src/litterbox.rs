use crate::backend::HostingProvider;
use crate::http::{file_part, non_empty, read_body};
use crate::ProviderError;
use bytes::Bytes;
use linkdrop_config::EndpointSettings;
use linkdrop_models::{ProviderKind, DEFAULT_EXPIRY, EXPIRY_CHOICES};
use reqwest::multipart::Form;
use std::time::Duration;

/// Maps a caller hint to the `time` field litterbox receives.
///
/// No hint means the default expiry, an unsupported hint silently becomes the
/// default, and an empty hint means the field is left out entirely.
pub fn resolve_expiry(hint: Option<&str>) -> Option<&'static str> {
    let hint = hint.unwrap_or(DEFAULT_EXPIRY);
    let choice = EXPIRY_CHOICES
        .iter()
        .copied()
        .find(|choice| *choice == hint)
        .unwrap_or(DEFAULT_EXPIRY);

    if choice.is_empty() {
        None
    } else {
        Some(choice)
    }
}

/// litterbox.catbox.moe: temporary catbox uploads with an expiry field
pub struct LitterboxProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl LitterboxProvider {
    pub fn new(client: reqwest::Client, settings: &EndpointSettings) -> Self {
        Self {
            client,
            endpoint: settings.endpoint.clone(),
            timeout: settings.timeout(),
        }
    }
}

#[async_trait::async_trait]
impl HostingProvider for LitterboxProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Litterbox
    }

    fn accepts_hint(&self) -> bool {
        true
    }

    async fn upload(
        &self,
        filename: &str,
        payload: Bytes,
        hint: Option<&str>,
    ) -> Result<String, ProviderError> {
        let mut form = Form::new().text("reqtype", "fileupload");
        if let Some(time) = resolve_expiry(hint) {
            form = form.text("time", time);
        }
        let form = form.part("fileToUpload", file_part(self.kind(), filename, payload)?);

        let response = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProviderError::transport(self.kind(), e))?;

        let body = read_body(self.kind(), response).await?;
        non_empty(self.kind(), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn provider(endpoint: &str) -> LitterboxProvider {
        let settings = EndpointSettings {
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
            public_base: None,
        };
        LitterboxProvider::new(reqwest::Client::new(), &settings)
    }

    #[test]
    fn test_resolve_expiry() {
        assert_eq!(resolve_expiry(Some("12h")), Some("12h"));
        assert_eq!(resolve_expiry(Some("72h")), Some("72h"));
        assert_eq!(resolve_expiry(Some("99h")), Some("1h"));
        assert_eq!(resolve_expiry(Some("1d")), Some("1h"));
        assert_eq!(resolve_expiry(None), Some("1h"));
        assert_eq!(resolve_expiry(Some("")), None);
    }

    #[tokio::test]
    async fn test_invalid_hint_sends_default_expiry() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="reqtype"\r\n\r\nfileupload"#.to_string()),
                Matcher::Regex(r#"name="time"\r\n\r\n1h\r\n"#.to_string()),
                Matcher::Regex(r#"name="fileToUpload"; filename="cat.png""#.to_string()),
            ]))
            .with_status(200)
            .with_body("https://litter.catbox.moe/q1w2e3.png")
            .create_async()
            .await;

        let url = provider(&server.url())
            .upload("cat.png", Bytes::from_static(b"0123456789"), Some("99h"))
            .await
            .unwrap();

        assert_eq!(url, "https://litter.catbox.moe/q1w2e3.png");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_valid_hint_is_forwarded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#"name="time"\r\n\r\n72h\r\n"#.to_string()))
            .with_status(200)
            .with_body("https://litter.catbox.moe/z.png")
            .create_async()
            .await;

        provider(&server.url())
            .upload("z.png", Bytes::from_static(b"z"), Some("72h"))
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_hint_omits_time_field() {
        let mut server = mockito::Server::new_async().await;
        let with_time = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#"name="time""#.to_string()))
            .with_status(200)
            .with_body("https://litter.catbox.moe/timed.png")
            .expect(0)
            .create_async()
            .await;
        let without_time = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#"name="fileToUpload"; filename="e.png""#.to_string()))
            .with_status(200)
            .with_body("https://litter.catbox.moe/e.png")
            .create_async()
            .await;

        let url = provider(&server.url())
            .upload("e.png", Bytes::from_static(b"e"), Some(""))
            .await
            .unwrap();

        assert_eq!(url, "https://litter.catbox.moe/e.png");
        with_time.assert_async().await;
        without_time.assert_async().await;
    }

    #[test]
    fn test_accepts_hint() {
        assert!(provider("https://litterbox.catbox.moe/").accepts_hint());
    }
}
