use super::errors::UploadError;
use super::models::Uploader;
use super::probe::{AccessProbe, HttpProbe};
use bytes::Bytes;
use linkdrop_config::Config;
use linkdrop_events::{AppEvent, EventBus};
use linkdrop_models::{ProviderKind, ProviderMode, UploadRequest, DEFAULT_AUTO_ORDER, FALLBACK_PROVIDER};
use linkdrop_storage::{ProviderError, ProviderRegistry};
use linkdrop_utils::ensure_https;
use std::sync::Arc;

type Result<T> = std::result::Result<T, UploadError>;

const SECURE_PREFIX: &str = "https://";

impl Uploader {
    pub fn new(registry: Arc<ProviderRegistry>, probe: Arc<dyn AccessProbe>) -> Self {
        Self {
            registry,
            probe,
            auto_order: Arc::from(DEFAULT_AUTO_ORDER.to_vec()),
            events: None,
        }
    }

    /// Wires the stock adapters and the HTTP probe from configuration
    pub fn from_config(config: &Config, events: Option<Arc<EventBus>>) -> Result<Self> {
        let registry = ProviderRegistry::from_settings(&config.providers, &config.http.user_agent)?;
        let probe = HttpProbe::with_timeout(config.http.probe_timeout())
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        let mut uploader = Self::new(Arc::new(registry), Arc::new(probe))
            .with_auto_order(config.upload.auto_order.clone());
        uploader.events = events;

        Ok(uploader)
    }

    /// Replaces the provider sequence tried by the `auto` mode
    pub fn with_auto_order(mut self, order: Vec<ProviderKind>) -> Self {
        self.auto_order = Arc::from(order);
        self
    }

    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn auto_order(&self) -> &[ProviderKind] {
        &self.auto_order
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Ordered providers to try for a mode name.
    ///
    /// An unknown name yields the single fallback provider, not the `auto` list.
    pub fn candidates(&self, mode: &str) -> Vec<ProviderKind> {
        let mode = match ProviderMode::parse(mode) {
            Some(mode) => mode,
            None => {
                tracing::warn!(
                    "Unknown provider mode '{}', using {}",
                    mode,
                    FALLBACK_PROVIDER
                );
                ProviderMode::Single(FALLBACK_PROVIDER)
            }
        };

        match mode {
            ProviderMode::Auto => self.auto_order.to_vec(),
            ProviderMode::Single(kind) => vec![kind],
        }
    }

    pub async fn upload_bytes(
        &self,
        filename: &str,
        payload: impl Into<Bytes>,
        mode: &str,
        hint: Option<&str>,
    ) -> Result<String> {
        let mut request = UploadRequest::new(filename, payload).with_mode(mode);
        if let Some(hint) = hint {
            request = request.with_hint(hint);
        }
        self.upload(&request).await
    }

    /// Tries each candidate in order and returns the first link that was
    /// uploaded, normalized to https and verified reachable.
    pub async fn upload(&self, request: &UploadRequest) -> Result<String> {
        if request.filename().trim().is_empty() {
            return Err(UploadError::InvalidRequest(
                "filename must not be empty".to_string(),
            ));
        }

        self.emit(AppEvent::UploadStarted {
            filename: request.filename().to_string(),
            size: request.size(),
            mode: request.mode().to_string(),
        });

        let mut attempts = 0;
        let mut last: Option<UploadError> = None;

        for kind in self.candidates(request.mode()) {
            let Some(provider) = self.registry.get(kind) else {
                tracing::warn!("Provider {} is not registered, skipping", kind);
                continue;
            };

            attempts += 1;
            self.emit(AppEvent::AttemptStarted {
                provider: kind.to_string(),
                attempt: attempts,
            });

            let hint = if provider.accepts_hint() { request.hint() } else { None };

            let raw = match provider
                .upload(request.filename(), request.payload().clone(), hint)
                .await
            {
                Ok(raw) => raw,
                Err(err) => {
                    self.emit(AppEvent::AttemptFailed {
                        provider: kind.to_string(),
                        error: err.to_string(),
                    });
                    last = Some(UploadError::Provider(err));
                    continue;
                }
            };

            let url = ensure_https(raw.trim());
            if !url.starts_with(SECURE_PREFIX) {
                let err = ProviderError::parse(kind, format!("not an http(s) link: {}", url));
                self.emit(AppEvent::AttemptFailed {
                    provider: kind.to_string(),
                    error: err.to_string(),
                });
                last = Some(UploadError::Provider(err));
                continue;
            }

            if self.probe.is_accessible(&url).await {
                self.emit(AppEvent::UploadSucceeded {
                    provider: kind.to_string(),
                    url: url.clone(),
                });
                return Ok(url);
            }

            self.emit(AppEvent::NotAccessible {
                provider: kind.to_string(),
                url: url.clone(),
            });
            last = Some(UploadError::NotAccessible { provider: kind, url });
        }

        self.emit(AppEvent::UploadExhausted {
            filename: request.filename().to_string(),
            attempts,
        });

        Err(UploadError::Exhausted {
            attempts,
            last: last.map(Box::new),
        })
    }

    fn emit(&self, event: AppEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}
