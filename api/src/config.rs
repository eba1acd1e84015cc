//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use shared::config::{LogSources, DEFAULT_ALERT_LOG, DEFAULT_HEALING_LOG, DEFAULT_HEALTH_LOG};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `LOCC_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `LOCC_PORT`: The port to listen on (default: 8000)
/// - `LOCC_HEALTH_LOG`: Health snapshot log (default: `/var/log/locc/agent.json`)
/// - `LOCC_ALERT_LOG`: Alert log (default: `/var/log/locc/alerts.log`)
/// - `LOCC_HEALING_LOG`: Self-healing log (default: `/var/log/locc/healing.log`)
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Locations of the agent logs.
    pub sources: LogSources,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LOCC_PORT` is set but cannot be parsed as a valid port number
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("LOCC_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("LOCC_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("LOCC_PORT must be a valid port number")?
            .unwrap_or(8000);

        let sources = LogSources::new(
            path_from_env("LOCC_HEALTH_LOG", DEFAULT_HEALTH_LOG),
            path_from_env("LOCC_ALERT_LOG", DEFAULT_ALERT_LOG),
            path_from_env("LOCC_HEALING_LOG", DEFAULT_HEALING_LOG),
        );

        Ok(Self {
            host,
            port,
            sources,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port combination is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    std::env::var_os(var).map_or_else(|| PathBuf::from(default), PathBuf::from)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            sources: LogSources::default(),
        }
    }
}
