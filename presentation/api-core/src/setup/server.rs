use std::time::Duration;

use poem::{Endpoint, Server as PoemServer, listener::TcpListener};

use crate::config::server_config::ServerConfig;

/// In-flight requests get this long to finish once a shutdown signal arrives.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    /// Serves `app` until SIGINT/SIGTERM. Failing to bind is returned as an
    /// error so the caller can exit non-zero.
    pub async fn run<E>(app: E, config: &ServerConfig) -> anyhow::Result<()>
    where
        E: Endpoint + 'static,
    {
        let addr = config.bind_address();
        tracing::info!("Server listening on http://{}", addr);

        PoemServer::new(TcpListener::bind(addr.clone()))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_GRACE))
            .await
            .map_err(|e| {
                tracing::error!("Server on {} stopped with error: {}", addr, e);
                e
            })?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
