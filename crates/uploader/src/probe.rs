use reqwest::StatusCode;
use std::time::Duration;

/// Confirms an uploaded link is publicly fetchable
#[async_trait::async_trait]
pub trait AccessProbe: Send + Sync {
    /// Never fails: any error counts as "not accessible"
    async fn is_accessible(&self, url: &str) -> bool;
}

/// HEAD first, then a one-chunk streaming GET for hosts that refuse HEAD
pub struct HttpProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(client: reqwest::Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Probe with its own client; redirects are followed
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::new(client, timeout))
    }

    async fn check(&self, url: &str) -> Result<bool, reqwest::Error> {
        let head = self.client.head(url).timeout(self.timeout).send().await?;
        let status = head.status();

        if status.is_success() {
            return Ok(true);
        }

        // Some hosts block HEAD from non-browser clients but serve the file
        if status == StatusCode::FORBIDDEN || status == StatusCode::METHOD_NOT_ALLOWED {
            let mut response = self.client.get(url).timeout(self.timeout).send().await?;
            let reachable = response.status().is_success();

            // One chunk proves the stream opens; dropping the response
            // closes the connection instead of draining the rest.
            let _ = response.chunk().await;
            drop(response);

            return Ok(reachable);
        }

        Ok(false)
    }
}

#[async_trait::async_trait]
impl AccessProbe for HttpProbe {
    async fn is_accessible(&self, url: &str) -> bool {
        match self.check(url).await {
            Ok(reachable) => reachable,
            Err(e) => {
                tracing::debug!("Probe of {} failed: {}", url, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe() -> HttpProbe {
        HttpProbe::with_timeout(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_head_success() {
        let mut server = mockito::Server::new_async().await;
        let head = server.mock("HEAD", "/f.png").with_status(200).create_async().await;
        let get = server.mock("GET", "/f.png").expect(0).create_async().await;

        assert!(probe().is_accessible(&format!("{}/f.png", server.url())).await);
        head.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_forbidden_head_escalates_to_get() {
        let mut server = mockito::Server::new_async().await;
        let head = server.mock("HEAD", "/f.png").with_status(403).create_async().await;
        let get = server
            .mock("GET", "/f.png")
            .with_status(200)
            .with_body(vec![7u8; 64 * 1024])
            .create_async()
            .await;

        assert!(probe().is_accessible(&format!("{}/f.png", server.url())).await);
        head.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_method_not_allowed_then_failing_get() {
        let mut server = mockito::Server::new_async().await;
        server.mock("HEAD", "/f.png").with_status(405).create_async().await;
        server.mock("GET", "/f.png").with_status(500).create_async().await;

        assert!(!probe().is_accessible(&format!("{}/f.png", server.url())).await);
    }

    #[tokio::test]
    async fn test_not_found_does_not_escalate() {
        let mut server = mockito::Server::new_async().await;
        let head = server.mock("HEAD", "/gone").with_status(404).create_async().await;
        let get = server.mock("GET", "/gone").with_status(404).expect(0).create_async().await;

        assert!(!probe().is_accessible(&format!("{}/gone", server.url())).await);
        head.assert_async().await;
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_redirect_is_followed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("HEAD", "/short")
            .with_status(307)
            .with_header("location", "/long/f.png")
            .create_async()
            .await;
        let target = server.mock("HEAD", "/long/f.png").with_status(200).create_async().await;

        assert!(probe().is_accessible(&format!("{}/short", server.url())).await);
        target.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_errors_are_unreachable() {
        assert!(!probe().is_accessible("http://127.0.0.1:1/f.png").await);
        assert!(!probe().is_accessible("not a url").await);
    }
}
