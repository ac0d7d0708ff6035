use super::models::{AppEvent, EventBus};
use colored::Colorize;
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    /// Console lines are dropped in silent mode; tracing output is not
    fn print(&self, line: String) {
        if !self.silent_mode {
            println!("{}", line);
        }
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Application lifecycle
            AppEvent::Starting => {
                self.print(format!("\n{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black()));
                self.print(format!("  {}", "linkdrop - Upload Gateway".white().bold()));
                self.print(format!("  {} {}", "Version".dimmed(), env!("CARGO_PKG_VERSION").cyan()));
                self.print(format!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_black()));
            }
            AppEvent::Ready { addr, url } => {
                self.print(format!("{}", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green()));
                self.print(format!("  {} {}", "Server".white(), addr.cyan()));
                self.print(format!("  {} {}", "URL   ".white(), url.blue()));
                self.print(format!("{}\n", "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".green()));
            }
            AppEvent::Shutdown => {
                self.print(format!("\n{}", "Server shutting down".red()));
            }

            // Configuration
            AppEvent::ConfigLoading { path } => {
                self.print(format!("  {} {}", "Loading config".dimmed(), path.cyan()));
            }
            AppEvent::ConfigLoaded { default_mode, auto_order } => {
                self.print(format!(
                    "  {} mode {} ({})",
                    "✓".green(),
                    default_mode.cyan(),
                    auto_order.join(" → ").dimmed()
                ));
            }
            AppEvent::ConfigCreated { path } => {
                tracing::warn!("Configuration file not found");
                tracing::info!("Created default configuration at: {}", path);
            }
            AppEvent::ConfigMigrated { added_fields } => {
                if !added_fields.is_empty() {
                    self.print(format!(
                        "  {} Config updated: added {}",
                        "↻".blue(),
                        added_fields.join(", ").dimmed()
                    ));
                }
            }
            AppEvent::ConfigError { error } => {
                tracing::error!("Configuration error: {}", error);
            }

            // Providers
            AppEvent::ProvidersRegistered { providers } => {
                self.print(format!(
                    "  {} {} provider(s): {}",
                    "✓".green(),
                    providers.len().to_string().cyan(),
                    providers.join(", ").dimmed()
                ));
            }

            // Uploads
            AppEvent::UploadStarted { filename, size, mode } => {
                tracing::info!(filename = %filename, size, mode = %mode, "Upload started");
            }
            AppEvent::AttemptStarted { provider, attempt } => {
                tracing::debug!(provider = %provider, attempt, "Trying provider");
            }
            AppEvent::AttemptFailed { provider, error } => {
                tracing::warn!(provider = %provider, "Upload attempt failed: {}", error);
                self.print(format!("  {} {} {}", "✗".red(), provider.cyan(), error.dimmed()));
            }
            AppEvent::NotAccessible { provider, url } => {
                tracing::warn!(provider = %provider, url = %url, "Uploaded but not accessible");
                self.print(format!("  {} {} not accessible: {}", "⚠".yellow(), provider.cyan(), url.dimmed()));
            }
            AppEvent::UploadSucceeded { provider, url } => {
                tracing::info!(provider = %provider, url = %url, "Upload verified");
                self.print(format!("  {} {} {}", "↑".green(), provider.cyan(), url.blue()));
            }
            AppEvent::UploadExhausted { filename, attempts } => {
                tracing::error!(filename = %filename, attempts, "All providers failed");
            }
        }
    }
}
