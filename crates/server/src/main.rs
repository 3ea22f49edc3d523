use anyhow::Context;

use toonmaker_server::{ServerConfig, app, frontend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    toonmaker_observability::init();

    let config = ServerConfig::from_env()?;
    if !frontend::has_index(&config.root) {
        tracing::warn!(
            "{} has no {}; unmatched paths will return 404",
            config.root.display(),
            frontend::INDEX_FILE
        );
    }

    let app = app::build_app(&config.root);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("Frontend running on http://localhost:{}", config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down gracefully..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
