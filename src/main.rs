//! Stroke risk service entry point.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use stroke_risk::adapters::http::{app_router, AssessmentAppState};
use stroke_risk::adapters::model::ArtifactError;
use stroke_risk::config::{AppConfig, ConfigError};
use stroke_risk::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("Model artifacts failed to load and degraded mode is disabled: {0}")]
    Model(#[from] ArtifactError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed yet.
        eprintln!("stroke-risk failed to start: {}", e);
        error!(error = %e, "Fatal startup error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    telemetry::init(&config.server)?;

    let state = AssessmentAppState::from_config(&config.model)?;
    let app = app_router(state, &config.server);

    let addr: SocketAddr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        "Stroke risk service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
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
                warn!(error = %e, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received");
}
