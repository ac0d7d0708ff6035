use linkdrop_models::{ProviderKind, ProviderMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "super::defaults::server_settings")]
    pub server: ServerSettings,
    #[serde(default = "super::defaults::http_settings")]
    pub http: HttpSettings,
    #[serde(default = "super::defaults::upload_settings")]
    pub upload: UploadSettings,
    #[serde(default = "super::defaults::provider_settings")]
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    #[serde(default = "super::defaults::timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "super::defaults::max_body_size")]
    pub max_body_size_mb: usize,
    #[serde(default = "super::defaults::allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "super::defaults::max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default = "super::defaults::enable_compression")]
    pub enable_compression: bool,
}

/// Outbound HTTP behaviour shared by every provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpSettings {
    #[serde(default = "super::defaults::user_agent")]
    pub user_agent: String,
    #[serde(default = "super::defaults::probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    #[serde(default = "super::defaults::default_mode")]
    pub default_mode: String,
    #[serde(default = "super::defaults::default_expiry")]
    pub default_expiry: String,
    #[serde(default = "super::defaults::auto_order")]
    pub auto_order: Vec<ProviderKind>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default = "super::defaults::catbox")]
    pub catbox: EndpointSettings,
    #[serde(default = "super::defaults::litterbox")]
    pub litterbox: EndpointSettings,
    #[serde(default = "super::defaults::pixeldrain")]
    pub pixeldrain: EndpointSettings,
    #[serde(rename = "0x0", default = "super::defaults::zero_x0")]
    pub zero_x0: EndpointSettings,
    #[serde(rename = "transfer.sh", default = "super::defaults::transfer_sh")]
    pub transfer_sh: EndpointSettings,
}

/// Where a provider lives and how long an upload to it may take
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Prefix used to build public links from bare identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_base: Option<String>,
}

impl EndpointSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ProviderSettings {
    pub fn get(&self, kind: ProviderKind) -> &EndpointSettings {
        match kind {
            ProviderKind::Catbox => &self.catbox,
            ProviderKind::Litterbox => &self.litterbox,
            ProviderKind::Pixeldrain => &self.pixeldrain,
            ProviderKind::ZeroX0 => &self.zero_x0,
            ProviderKind::TransferSh => &self.transfer_sh,
        }
    }
}

impl HttpSettings {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl UploadSettings {
    pub fn default_mode(&self) -> ProviderMode {
        ProviderMode::resolve(&self.default_mode)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: super::defaults::server_settings(),
            http: super::defaults::http_settings(),
            upload: super::defaults::upload_settings(),
            providers: super::defaults::provider_settings(),
        }
    }
}
