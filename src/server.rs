//! HTTP server lifecycle: bind, serve, and graceful shutdown.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::infrastructure::AppConfig;

// =============================================================================
// Server
// =============================================================================

/// Binds the configured address and serves a router until shutdown.
#[derive(Debug, Clone)]
pub struct Server {
    config: AppConfig,
}

impl Server {
    /// Creates a server for the given configuration.
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serves `router` until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails.
    pub async fn run(self, router: Router) -> anyhow::Result<()> {
        let address = self.config.socket_addr();

        tracing::info!("Starting server on {}", address);

        let listener = TcpListener::bind(&address).await?;

        match listener.local_addr() {
            Ok(local) => tracing::info!("Server listening on {}", local),
            Err(error) => tracing::warn!(%error, "Could not determine local address"),
        }

        serve(listener, router, shutdown_signal()).await
    }
}

/// Serves `router` on an already bound listener until `shutdown` completes.
///
/// In-flight requests are drained before returning.
///
/// # Errors
///
/// Returns an error if the underlying server fails.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

// =============================================================================
// Shutdown Signal
// =============================================================================

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AppState, create_router};
    use rstest::rstest;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    #[rstest]
    fn server_keeps_config() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            seed_fixtures: false,
        };

        let server = Server::new(config.clone());

        assert_eq!(server.config(), &config);
    }

    #[rstest]
    #[tokio::test]
    async fn serve_answers_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(serve(
            listener,
            create_router(AppState::seeded()),
            async move {
                let _ = stopped.await;
            },
        ));

        let mut stream = TcpStream::connect(address).await.unwrap();
        stream
            .write_all(b"GET /todo/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("\"todo\":\"Review quarterly budget report\""));

        stop.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
