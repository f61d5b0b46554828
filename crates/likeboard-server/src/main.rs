//! Likeboard Server binary

use anyhow::{Context, Result};
use clap::Parser;
use likeboard_server::{config::ServerConfig, router, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    install_panic_hook();

    let config = ServerConfig::parse();

    if let Err(e) = init_tracing(&config.log_level) {
        eprintln!("[FATAL] Failed to initialize logging: {:#}", e);
        std::process::exit(1);
    }

    info!("Starting Likeboard Server v{}", env!("CARGO_PKG_VERSION"));
    info!("PID: {}", std::process::id());

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Report panics through tracing as well as stderr, since the subscriber may
/// not be writing to the terminal.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        eprintln!("likeboard-server panicked at {}: {}", location, message);
        error!(%location, "panic: {}", message);
    }));
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log filter '{}'", directive))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let state = AppState::in_memory();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server exited");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
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
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown requested");
}
