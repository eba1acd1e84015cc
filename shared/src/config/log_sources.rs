//! Locations of the agent's log files.
//!
//! The three sources are fixed for the lifetime of a process and handed to
//! the log store at construction.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default path of the health snapshot log.
pub const DEFAULT_HEALTH_LOG: &str = "/var/log/locc/agent.json";

/// Default path of the alert transition log.
pub const DEFAULT_ALERT_LOG: &str = "/var/log/locc/alerts.log";

/// Default path of the self-healing log.
pub const DEFAULT_HEALING_LOG: &str = "/var/log/locc/healing.log";

/// Identifies one of the three log sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    /// Health snapshot log (JSON lines).
    Health,
    /// Alert transition log (pipe-delimited).
    Alerts,
    /// Self-healing log (free text).
    Healing,
}

impl LogSource {
    /// Short name used in log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Alerts => "alerts",
            Self::Healing => "healing",
        }
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paths of the three agent logs.
///
/// # Examples
///
/// ```
/// use shared::config::{LogSource, LogSources};
///
/// let sources = LogSources::new("/tmp/agent.json", "/tmp/alerts.log", "/tmp/healing.log");
/// assert_eq!(sources.path(LogSource::Alerts).to_str(), Some("/tmp/alerts.log"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSources {
    /// Health snapshot log.
    pub health: PathBuf,
    /// Alert transition log.
    pub alerts: PathBuf,
    /// Self-healing log.
    pub healing: PathBuf,
}

impl LogSources {
    /// Creates a configuration from explicit paths.
    #[must_use]
    pub fn new(
        health: impl Into<PathBuf>,
        alerts: impl Into<PathBuf>,
        healing: impl Into<PathBuf>,
    ) -> Self {
        Self {
            health: health.into(),
            alerts: alerts.into(),
            healing: healing.into(),
        }
    }

    /// Places all three logs under one directory using the agent's file names
    /// (`agent.json`, `alerts.log`, `healing.log`).
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            health: dir.join("agent.json"),
            alerts: dir.join("alerts.log"),
            healing: dir.join("healing.log"),
        }
    }

    /// Returns the path for a given source.
    #[must_use]
    pub fn path(&self, source: LogSource) -> &Path {
        match source {
            LogSource::Health => &self.health,
            LogSource::Alerts => &self.alerts,
            LogSource::Healing => &self.healing,
        }
    }
}

impl Default for LogSources {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_LOG, DEFAULT_ALERT_LOG, DEFAULT_HEALING_LOG)
    }
}
