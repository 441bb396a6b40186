//! idscan server
//!
//! Accepts photos of PAN cards, Aadhaar cards and driving licences, runs OCR,
//! and returns the detected document type, extracted identity fields and a
//! completeness risk score.

use anyhow::Context;
use idscan_ocr::{build_recognizer, IdentityPipeline};
use tokio::signal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod error;
mod routes;
mod state;

use config::{LogFormat, ServerConfig};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::load().context("Failed to load configuration")?;
    init_tracing(config.log_format);

    tracing::info!("Starting idscan-server v{}", env!("CARGO_PKG_VERSION"));

    // One engine for the whole process; every request shares it.
    let recognizer = build_recognizer(
        config.ocr_backend,
        config.tessdata_path.as_deref(),
        &config.tesseract_lang,
    )
    .context("Failed to initialize OCR backend")?;
    tracing::info!(backend = recognizer.name(), "OCR backend ready");

    let state = AppState::new(IdentityPipeline::new(recognizer), &config);
    let app = routes::router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("idscan-server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "idscan_server=info,idscan_ocr=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
