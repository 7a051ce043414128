#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod routes;

use args::Args;
use clap::Parser;
use httpwr_config::Config;
use httpwr_server::Server;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    // Initialize logging
    httpwr_telemetry::init(&config.telemetry)?;

    tracing::info!(
        config_path = ?args.config.as_ref().map(|p| p.display().to_string()),
        "starting httpwr-demo"
    );

    // Build server
    let mut server = Server::new(&config.server, routes::router());
    if let Some(listen) = args.listen {
        server = server.with_listen_address(listen);
    }

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // Run server
    server.serve(shutdown).await?;

    tracing::info!("httpwr-demo stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
