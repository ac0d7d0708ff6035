use crate::backend::HostingProvider;
use crate::{
    CatboxProvider, LitterboxProvider, PixeldrainProvider, ProviderError, TransferShProvider,
    ZeroX0Provider,
};
use linkdrop_config::ProviderSettings;
use linkdrop_models::{ProviderKind, DEFAULT_AUTO_ORDER};
use std::collections::HashMap;
use std::sync::Arc;

/// Read-only set of adapters keyed by provider, built once at startup
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn HostingProvider>>,
}

impl ProviderRegistry {
    /// Builds the five stock adapters around one shared HTTP client
    pub fn from_settings(settings: &ProviderSettings, user_agent: &str) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProviderError::ClientBuild(e.to_string()))?;

        let providers: Vec<Arc<dyn HostingProvider>> = vec![
            Arc::new(CatboxProvider::new(client.clone(), &settings.catbox)),
            Arc::new(LitterboxProvider::new(client.clone(), &settings.litterbox)),
            Arc::new(PixeldrainProvider::new(client.clone(), &settings.pixeldrain)),
            Arc::new(ZeroX0Provider::new(client.clone(), &settings.zero_x0, user_agent)),
            Arc::new(TransferShProvider::new(client, &settings.transfer_sh, user_agent)),
        ];

        Ok(Self::from_providers(providers))
    }

    /// Registers arbitrary adapters; a later adapter replaces an earlier one of the same kind
    pub fn from_providers<I>(providers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn HostingProvider>>,
    {
        let mut map = HashMap::new();
        for provider in providers {
            tracing::debug!("Registered provider {}", provider.kind());
            map.insert(provider.kind(), provider);
        }
        Self { providers: map }
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn HostingProvider>> {
        self.providers.get(&kind).cloned()
    }

    /// Registered kinds in the default priority order
    pub fn kinds(&self) -> Vec<ProviderKind> {
        DEFAULT_AUTO_ORDER
            .into_iter()
            .filter(|kind| self.providers.contains_key(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_registers_all_providers() {
        let settings = linkdrop_config::Config::default().providers;
        let registry = ProviderRegistry::from_settings(&settings, "curl/8.0").unwrap();

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.kinds(), DEFAULT_AUTO_ORDER.to_vec());
        for kind in DEFAULT_AUTO_ORDER {
            let provider = registry.get(kind).unwrap();
            assert_eq!(provider.kind(), kind);
            assert_eq!(provider.accepts_hint(), kind == ProviderKind::Litterbox);
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get(ProviderKind::Catbox).is_none());
        assert!(registry.kinds().is_empty());
    }
}
