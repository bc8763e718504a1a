//! HTTP listener settings for the stroke risk service.
//!
//! Read from the `server` section or `STROKE_RISK__SERVER__*` variables.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Where the service listens and how it treats each request.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface address; must be an IP literal, not a hostname
    #[serde(default = "default_host")]
    pub host: String,

    /// Listening port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment stage; `production` switches logs to JSON
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seconds before a request is answered with 408
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call `/predict` from a browser;
    /// any origin when unset
    pub cors_origins: Option<String>,
}

/// Deployment stage
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl ServerConfig {
    /// Listener address built from `host` and `port`
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    /// Production logs are emitted as JSON lines
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Timeout applied by the router's `TimeoutLayer`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Origins for the CORS layer; empty means permissive
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rejects a zero port, a timeout outside 1..=300 s, or a non-IP host
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,stroke_risk=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
