// Re-export all public APIs from the workspace crates

pub use linkdrop_models::*;
pub use linkdrop_events::*;
pub use linkdrop_utils::*;
pub use linkdrop_filesystem::*;
pub use linkdrop_config::*;
pub use linkdrop_storage::*;
pub use linkdrop_uploader::*;
pub use linkdrop_api::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Core models
    pub use linkdrop_models::{ProviderKind, ProviderMode, UploadRequest};

    // Events
    pub use linkdrop_events::{AppEvent, EventBus};

    // Providers
    pub use linkdrop_storage::{HostingProvider, ProviderError, ProviderRegistry};

    // Orchestration
    pub use linkdrop_uploader::{AccessProbe, HttpProbe, UploadError, Uploader};

    // Configuration
    pub use linkdrop_config::Config;

    // Filesystem
    pub use linkdrop_filesystem::FileSystem;
}
