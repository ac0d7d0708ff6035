//! Default values for configuration fields

use linkdrop_models::{ProviderKind, DEFAULT_AUTO_ORDER, DEFAULT_EXPIRY};

pub fn host() -> String {
    "127.0.0.1".to_string()
}

pub fn port() -> u16 {
    8090
}

pub fn timeout_secs() -> u64 {
    900  // Default auto chain worst case is 800s (uploads + two probe requests each)
}

pub fn max_body_size() -> usize {
    200
}

pub fn max_concurrent_requests() -> usize {
    64
}

pub fn allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

pub fn enable_compression() -> bool {
    true
}

pub fn server_settings() -> super::models::ServerSettings {
    super::models::ServerSettings {
        host: host(),
        port: port(),
        timeout_secs: timeout_secs(),
        max_body_size_mb: max_body_size(),
        allowed_origins: allowed_origins(),
        max_concurrent_requests: max_concurrent_requests(),
        enable_compression: enable_compression(),
    }
}

// HTTP defaults
pub fn user_agent() -> String {
    "curl/8.0".to_string()  // Some hosts reject unknown clients
}

pub fn probe_timeout_secs() -> u64 {
    20
}

pub fn http_settings() -> super::models::HttpSettings {
    super::models::HttpSettings {
        user_agent: user_agent(),
        probe_timeout_secs: probe_timeout_secs(),
    }
}

// Upload defaults
pub fn default_mode() -> String {
    "auto".to_string()
}

pub fn default_expiry() -> String {
    DEFAULT_EXPIRY.to_string()
}

pub fn auto_order() -> Vec<ProviderKind> {
    DEFAULT_AUTO_ORDER.to_vec()
}

pub fn upload_settings() -> super::models::UploadSettings {
    super::models::UploadSettings {
        default_mode: default_mode(),
        default_expiry: default_expiry(),
        auto_order: auto_order(),
    }
}

// Provider defaults
fn endpoint(endpoint: &str, timeout_secs: u64, public_base: Option<&str>) -> super::models::EndpointSettings {
    super::models::EndpointSettings {
        endpoint: endpoint.to_string(),
        timeout_secs,
        public_base: public_base.map(str::to_string),
    }
}

pub fn catbox() -> super::models::EndpointSettings {
    endpoint("https://catbox.moe/user/api.php", 120, Some("https://files.catbox.moe/"))
}

pub fn litterbox() -> super::models::EndpointSettings {
    endpoint("https://litterbox.catbox.moe/resources/internals/api.php", 120, None)
}

pub fn pixeldrain() -> super::models::EndpointSettings {
    endpoint("https://pixeldrain.com/api/file/", 180, Some("https://pixeldrain.com/u/"))
}

pub fn zero_x0() -> super::models::EndpointSettings {
    endpoint("https://0x0.st", 60, None)
}

pub fn transfer_sh() -> super::models::EndpointSettings {
    endpoint("https://transfer.sh/", 120, None)
}

pub fn provider_settings() -> super::models::ProviderSettings {
    super::models::ProviderSettings {
        catbox: catbox(),
        litterbox: litterbox(),
        pixeldrain: pixeldrain(),
        zero_x0: zero_x0(),
        transfer_sh: transfer_sh(),
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# linkdrop Configuration
# ===============================================================================

[server]
# Network
host = "127.0.0.1"                   # Bind address (keep local: /upload-path reads local files)
port = 8090                          # Server port

# Performance
timeout_secs = 900                   # Request timeout in seconds (must cover the whole provider chain)
max_concurrent_requests = 64         # Max simultaneous uploads
max_body_size_mb = 200               # Max upload body size in MB
enable_compression = true            # HTTP compression for JSON responses

# CORS
allowed_origins = ["*"]              # "*" = all origins | ["https://example.com"] for production

[http]
user_agent = "curl/8.0"              # Sent to providers that reject unknown clients (0x0, transfer.sh)
probe_timeout_secs = 20              # Timeout of the accessibility check on each uploaded link

[upload]
default_mode = "auto"                # auto | catbox | litterbox | pixeldrain | 0x0 | transfer.sh
default_expiry = "1h"                # litterbox only: 1h | 12h | 24h | 72h | "" (no explicit expiry)
auto_order = ["catbox", "litterbox", "pixeldrain", "0x0", "transfer.sh"]

# ===============================================================================
# PROVIDER ENDPOINTS
# ===============================================================================
[providers.catbox]
endpoint = "https://catbox.moe/user/api.php"
timeout_secs = 120
public_base = "https://files.catbox.moe/"

[providers.litterbox]
endpoint = "https://litterbox.catbox.moe/resources/internals/api.php"
timeout_secs = 120

[providers.pixeldrain]
endpoint = "https://pixeldrain.com/api/file/"
timeout_secs = 180
public_base = "https://pixeldrain.com/u/"

[providers."0x0"]
endpoint = "https://0x0.st"
timeout_secs = 60

[providers."transfer.sh"]
endpoint = "https://transfer.sh/"
timeout_secs = 120
"#;
