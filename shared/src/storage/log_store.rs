//! Log store trait and the file-backed implementation.
//!
//! Provides the `LogStore` trait for reading the agent's three logs and a
//! `FileLogStore` that re-reads the files on every call.

use crate::config::{LogSource, LogSources};
use crate::degrade::degrade;
use crate::models::{AlertEvent, HealingEvent, HealthSnapshot};
use crate::storage::tail;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a log source.
///
/// These never reach callers of the total `read_*` methods; they exist so the
/// fallible `try_*` methods can be inspected and tested.
#[derive(Debug, Error)]
pub enum LogReadError {
    /// The file could not be opened or read (missing, permissions, not UTF-8).
    #[error("Failed to read {log} log at {}: {error}", .path.display())]
    Io {
        /// Which log was being read.
        log: LogSource,
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The record could not be parsed.
    #[error("Malformed record in {log} log at {}: {error}", .path.display())]
    Parse {
        /// Which log was being read.
        log: LogSource,
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        error: serde_json::Error,
    },
}

impl LogReadError {
    /// The log source the error came from.
    #[must_use]
    pub fn log(&self) -> LogSource {
        match self {
            Self::Io { log, .. } | Self::Parse { log, .. } => *log,
        }
    }

    /// The file path the error came from.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }

    /// Returns `true` if the file simply does not exist yet.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { error, .. } if error.kind() == io::ErrorKind::NotFound)
    }
}

/// Trait for reading the agent's logs.
///
/// Implementors provide the fallible `try_*` readers. The `read_*` methods
/// are total: any error degrades to the empty value for that source.
/// Implementations must be thread-safe (Send + Sync).
pub trait LogStore: Send + Sync {
    /// Reads the final line of the health log.
    ///
    /// An empty log yields an empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its last line is not a
    /// JSON object.
    fn try_read_latest_health(&self) -> Result<HealthSnapshot, LogReadError>;

    /// Reads up to `limit` of the most recent alert events, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn try_read_alerts(&self, limit: usize) -> Result<Vec<AlertEvent>, LogReadError>;

    /// Reads up to `limit` of the most recent healing events, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn try_read_healing(&self, limit: usize) -> Result<Vec<HealingEvent>, LogReadError>;

    /// Returns the latest health snapshot, or an empty one.
    fn read_latest_health(&self) -> HealthSnapshot {
        degrade(self.try_read_latest_health())
    }

    /// Returns the most recent alert events, or none.
    fn read_alerts(&self, limit: usize) -> Vec<AlertEvent> {
        degrade(self.try_read_alerts(limit))
    }

    /// Returns the most recent healing events, or none.
    fn read_healing(&self, limit: usize) -> Vec<HealingEvent> {
        degrade(self.try_read_healing(limit))
    }
}

/// File-backed log store.
///
/// Holds only the configured paths. Every call opens the file read-only,
/// reads it whole, and accepts the content as found; writers are never
/// locked out or waited for.
///
/// # Example
///
/// ```
/// use shared::config::LogSources;
/// use shared::storage::{FileLogStore, LogStore};
///
/// let store = FileLogStore::new(LogSources::in_dir("/nonexistent"));
///
/// assert!(store.read_latest_health().is_empty());
/// assert!(store.read_alerts(20).is_empty());
/// assert!(store.read_healing(20).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct FileLogStore {
    sources: LogSources,
}

impl FileLogStore {
    /// Creates a store reading from the given locations.
    #[must_use]
    pub fn new(sources: LogSources) -> Self {
        Self { sources }
    }

    /// Returns the configured locations.
    #[must_use]
    pub fn sources(&self) -> &LogSources {
        &self.sources
    }

    fn read_source(&self, log: LogSource) -> Result<String, LogReadError> {
        let path = self.sources.path(log);
        std::fs::read_to_string(path).map_err(|error| LogReadError::Io {
            log,
            path: path.to_path_buf(),
            error,
        })
    }
}

impl LogStore for FileLogStore {
    fn try_read_latest_health(&self) -> Result<HealthSnapshot, LogReadError> {
        let content = self.read_source(LogSource::Health)?;

        let Some(line) = tail::last_line(&content) else {
            return Ok(HealthSnapshot::empty());
        };

        HealthSnapshot::parse_line(line).map_err(|error| LogReadError::Parse {
            log: LogSource::Health,
            path: self.sources.health.clone(),
            error,
        })
    }

    fn try_read_alerts(&self, limit: usize) -> Result<Vec<AlertEvent>, LogReadError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let content = self.read_source(LogSource::Alerts)?;
        let window = tail::tail(&content, limit);
        let scanned = window.len();

        let events: Vec<AlertEvent> = window
            .into_iter()
            .filter_map(AlertEvent::parse_line)
            .collect();

        if events.len() < scanned {
            tracing::debug!(
                skipped = scanned - events.len(),
                path = %self.sources.alerts.display(),
                "Skipped alert lines with too few fields"
            );
        }

        Ok(events)
    }

    fn try_read_healing(&self, limit: usize) -> Result<Vec<HealingEvent>, LogReadError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let content = self.read_source(LogSource::Healing)?;
        Ok(tail::tail(&content, limit)
            .into_iter()
            .map(HealingEvent::from_line)
            .collect())
    }
}
