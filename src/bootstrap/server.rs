use anyhow::Result;

pub async fn bind(addr: &str) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            let port = addr.split(':').last().unwrap_or("unknown");
            tracing::error!("❌ Port {} is already in use", port);
            tracing::error!("Another application is using this port");
            tracing::error!("Solutions:");
            tracing::error!("1. Stop the other application");
            tracing::error!("2. Change [server].port in linkdrop.toml");
            #[cfg(target_os = "windows")]
            tracing::error!("3. Find process: netstat -ano | findstr :{}", port);
            #[cfg(not(target_os = "windows"))]
            tracing::error!("3. Find process: lsof -i :{}", port);
        } else {
            tracing::error!("❌ Failed to bind server on {}: {}", addr, e);
        }
        anyhow::anyhow!("Failed to bind server: {}", e)
    })
}

/// Resolves on Ctrl+C; in-flight uploads finish before the server stops
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, initiating graceful shutdown...");
}
