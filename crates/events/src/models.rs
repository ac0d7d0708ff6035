use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    // Application lifecycle
    Starting,
    Ready { addr: String, url: String },
    Shutdown,

    // Configuration
    ConfigLoading { path: String },
    ConfigLoaded { default_mode: String, auto_order: Vec<String> },
    ConfigCreated { path: String },
    ConfigMigrated { added_fields: Vec<String> },
    ConfigError { error: String },

    // Providers
    ProvidersRegistered { providers: Vec<String> },

    // Uploads
    UploadStarted { filename: String, size: usize, mode: String },
    AttemptStarted { provider: String, attempt: usize },
    AttemptFailed { provider: String, error: String },
    NotAccessible { provider: String, url: String },
    UploadSucceeded { provider: String, url: String },
    UploadExhausted { filename: String, attempts: usize },

}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
