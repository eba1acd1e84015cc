//! Status query service.
//!
//! Shapes log store output into the health, alerts, healing, and summary
//! results. No caching: every call re-reads the logs.

use crate::config::LogSources;
use crate::query::response::{
    AlertsResponse, HealingResponse, HealthResponse, HealthStatus, SummaryResponse,
};
use crate::storage::{FileLogStore, LogStore};
use std::sync::Arc;

/// Limit applied when the caller does not provide one.
pub const DEFAULT_LIMIT: i64 = 20;

/// Fixed window used for both recency lists in the summary.
pub const SUMMARY_WINDOW: usize = 5;

/// Composes log store reads into query results.
///
/// Cloning is cheap; clones share the same store.
///
/// # Example
///
/// ```
/// use shared::config::LogSources;
/// use shared::query::{HealthStatus, QueryService};
///
/// let service = QueryService::from_sources(LogSources::in_dir("/nonexistent"));
///
/// assert_eq!(service.get_health().status, HealthStatus::NoData);
/// assert_eq!(service.get_alerts(None).count, 20);
/// assert!(!service.get_summary().health_available);
/// ```
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn LogStore>,
}

impl QueryService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Creates a service over a [`FileLogStore`] reading `sources`.
    #[must_use]
    pub fn from_sources(sources: LogSources) -> Self {
        Self::new(Arc::new(FileLogStore::new(sources)))
    }

    /// Latest health snapshot with its availability status.
    #[must_use]
    pub fn get_health(&self) -> HealthResponse {
        let data = self.store.read_latest_health();
        HealthResponse {
            status: HealthStatus::of(&data),
            data,
        }
    }

    /// Most recent alert events.
    ///
    /// `count` echoes the requested limit, not the number of events found.
    #[must_use]
    pub fn get_alerts(&self, limit: Option<i64>) -> AlertsResponse {
        let count = limit.unwrap_or(DEFAULT_LIMIT);
        let alerts = self.store.read_alerts(window(count));
        tracing::debug!(limit = count, returned = alerts.len(), "Read alerts");

        AlertsResponse {
            count,
            returned: alerts.len(),
            alerts,
        }
    }

    /// Most recent healing events.
    ///
    /// `count` echoes the requested limit, not the number of events found.
    #[must_use]
    pub fn get_healing(&self, limit: Option<i64>) -> HealingResponse {
        let count = limit.unwrap_or(DEFAULT_LIMIT);
        let events = self.store.read_healing(window(count));
        tracing::debug!(limit = count, returned = events.len(), "Read healing events");

        HealingResponse {
            count,
            returned: events.len(),
            events,
        }
    }

    /// Dashboard summary over all three sources.
    #[must_use]
    pub fn get_summary(&self) -> SummaryResponse {
        SummaryResponse {
            health_available: self.store.read_latest_health().is_available(),
            recent_alerts: self.store.read_alerts(SUMMARY_WINDOW),
            recent_healing: self.store.read_healing(SUMMARY_WINDOW),
        }
    }
}

/// Converts a requested limit into a line window; negative reads as zero.
fn window(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
