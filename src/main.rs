mod bootstrap;

use linkdrop_api::AppState;
use linkdrop_events::{AppEvent, EventBus};
use linkdrop_uploader::Uploader;
use crate::bootstrap::{config, logging, router, server};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    logging::initialize();

    let events = EventBus::new(false);
    events.emit(AppEvent::Starting);

    let config_path = std::env::var("LINKDROP_CONFIG").unwrap_or_else(|_| "linkdrop.toml".to_string());
    let config = config::load(&config_path, &events).await?;

    let uploader = Uploader::from_config(&config, Some(events.clone()))?;

    events.emit(AppEvent::ProvidersRegistered {
        providers: uploader
            .registry()
            .kinds()
            .iter()
            .map(|kind| kind.name().to_string())
            .collect(),
    });

    let app_state = AppState::new(
        uploader,
        config.upload.default_mode().name().to_string(),
        config.upload.default_expiry.clone(),
    );
    let app = router::build(&config, app_state);
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = server::bind(&addr).await?;

    events.emit(AppEvent::Ready {
        url: format!("http://{}", addr),
        addr,
    });

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    events.emit(AppEvent::Shutdown);
    Ok(())
}
