//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise `server.log_level` is used as the
//! filter. Production emits JSON lines, every other environment pretty text.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::config::ServerConfig;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Tracing subscriber already installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Installs the global tracing subscriber.
pub fn init(server: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(&server.log_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if server.is_production() {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()?;
    } else {
        registry.with(fmt::layer().pretty()).try_init()?;
    }

    Ok(())
}

fn env_filter(fallback: &str) -> Result<EnvFilter, ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback),
    }
}
