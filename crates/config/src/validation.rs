use super::errors::ConfigError;
use super::models::Config;
use linkdrop_models::{ProviderKind, ProviderMode, DEFAULT_AUTO_ORDER, EXPIRY_CHOICES};
use std::collections::HashSet;

/// A probe may issue a HEAD and then a GET, each with its own timeout
const PROBE_REQUESTS_PER_ATTEMPT: u64 = 2;

impl Config {
    /// Longest a single upload call can take before the orchestrator gives up.
    ///
    /// Covers both the `auto` chain and any single-provider mode.
    pub fn worst_case_upload_secs(&self) -> u64 {
        let attempt = |kind: ProviderKind| {
            self.providers.get(kind).timeout_secs
                + PROBE_REQUESTS_PER_ATTEMPT * self.http.probe_timeout_secs
        };

        let auto_chain: u64 = self.upload.auto_order.iter().map(|kind| attempt(*kind)).sum();
        let single = DEFAULT_AUTO_ORDER.into_iter().map(attempt).max().unwrap_or(0);

        auto_chain.max(single)
    }

    /// Rejects settings that would make every upload fail or misbehave
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.server.max_concurrent_requests == 0 {
            return Err(ConfigError::InvalidConfig(
                "server.max_concurrent_requests must be greater than 0".to_string(),
            ));
        }
        if self.http.probe_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "http.probe_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if ProviderMode::parse(&self.upload.default_mode).is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "upload.default_mode '{}' is not one of: {}",
                self.upload.default_mode,
                ProviderMode::all_names().join(", ")
            )));
        }

        let mut seen = HashSet::new();
        for kind in &self.upload.auto_order {
            if !seen.insert(kind) {
                return Err(ConfigError::InvalidConfig(format!(
                    "upload.auto_order lists '{}' more than once",
                    kind
                )));
            }
        }

        if !EXPIRY_CHOICES.contains(&self.upload.default_expiry.as_str()) {
            tracing::warn!(
                "upload.default_expiry '{}' is not supported by litterbox, 1h will be used",
                self.upload.default_expiry
            );
        }

        for kind in DEFAULT_AUTO_ORDER {
            let settings = self.providers.get(kind);
            if !settings.endpoint.starts_with("http://") && !settings.endpoint.starts_with("https://") {
                return Err(ConfigError::InvalidConfig(format!(
                    "providers.{}.endpoint must be an http(s) URL, got '{}'",
                    kind, settings.endpoint
                )));
            }
            if settings.timeout_secs == 0 {
                return Err(ConfigError::InvalidConfig(format!(
                    "providers.{}.timeout_secs must be greater than 0",
                    kind
                )));
            }
        }

        let worst_case = self.worst_case_upload_secs();
        if self.server.timeout_secs < worst_case {
            return Err(ConfigError::InvalidConfig(format!(
                "server.timeout_secs ({}) is shorter than the slowest provider chain ({}s); \
                 requests would time out before an upload failure can be reported",
                self.server.timeout_secs, worst_case
            )));
        }

        Ok(())
    }
}
