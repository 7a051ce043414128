mod health;

use std::net::SocketAddr;

use axum::Router;
use httpwr_config::ServerConfig;
use tower_http::trace::TraceLayer;

/// Router hosting fallible handlers, plus health check and request tracing
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server around the caller's routes
    pub fn new(config: &ServerConfig, routes: Router) -> Self {
        let mut app = routes;

        // Health check
        if config.health.enabled {
            app = app.route_service(
                &config.health.path,
                httpwr::adapt_fn(|w, req| Box::pin(health::health_handler(w, req))),
            );
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address: config.listen_address(),
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
