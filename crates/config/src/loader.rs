use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::migration::migrate_config_if_needed;
use super::models::Config;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ConfigError>;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_events(path, None).await
    }

    /// Loads configuration from a file with optional event bus for notifications
    pub async fn from_file_with_events<P: AsRef<Path>>(
        path: P,
        events: Option<&Arc<linkdrop_events::EventBus>>,
    ) -> Result<Self> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        migrate_config_if_needed(path, events).await?;

        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_toml_str(&content)?;

        Ok(config)
    }

    /// Parses and validates a configuration document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdrop_models::ProviderKind;

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_toml_str(DEFAULT_CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.server.port, 8090);
        assert_eq!(config.http.user_agent, "curl/8.0");
        assert_eq!(config.http.probe_timeout_secs, 20);
        assert_eq!(config.upload.default_mode, "auto");
        assert_eq!(config.upload.auto_order.len(), 5);
        assert_eq!(config.upload.auto_order[0], ProviderKind::Catbox);
        assert_eq!(config.upload.auto_order[4], ProviderKind::TransferSh);
        assert_eq!(config.providers.zero_x0.timeout_secs, 60);
        assert_eq!(config.providers.pixeldrain.timeout_secs, 180);
        assert_eq!(
            config.providers.catbox.public_base.as_deref(),
            Some("https://files.catbox.moe/")
        );
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.upload.default_expiry, "1h");
        assert_eq!(config.providers.transfer_sh.endpoint, "https://transfer.sh/");
    }

    #[test]
    fn test_custom_auto_order() {
        let config = Config::from_toml_str(
            r#"
[upload]
auto_order = ["0x0", "catbox"]
"#,
        )
        .unwrap();

        assert_eq!(
            config.upload.auto_order,
            vec![ProviderKind::ZeroX0, ProviderKind::Catbox]
        );
    }

    #[test]
    fn test_default_mode_is_normalized() {
        let config = Config::from_toml_str(
            r#"
[upload]
default_mode = "PixelDrain"
"#,
        )
        .unwrap();
        assert_eq!(
            config.upload.default_mode(),
            linkdrop_models::ProviderMode::Single(ProviderKind::Pixeldrain)
        );
        assert_eq!(config.upload.default_mode().name(), "pixeldrain");
    }

    #[test]
    fn test_unknown_provider_in_auto_order_is_rejected() {
        let result = Config::from_toml_str(
            r#"
[upload]
auto_order = ["catbox", "dropbox"]
"#,
        );
        assert!(matches!(result, Err(ConfigError::TomlParseError(_))));
    }

    #[tokio::test]
    async fn test_from_file_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linkdrop.toml");

        let config = Config::from_file(&path).await.unwrap();

        assert!(path.exists());
        assert_eq!(config.upload.default_mode, "auto");
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
    }
}
