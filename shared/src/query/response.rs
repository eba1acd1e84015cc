//! Response shapes for the four status queries.

use crate::models::{AlertEvent, HealingEvent, HealthSnapshot};
use serde::{Deserialize, Serialize};

/// Availability of the health snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    /// A non-empty snapshot was read.
    #[serde(rename = "ok")]
    Ok,
    /// No usable snapshot.
    #[serde(rename = "no-data")]
    NoData,
}

impl HealthStatus {
    /// Derives the status from a snapshot.
    #[must_use]
    pub fn of(snapshot: &HealthSnapshot) -> Self {
        if snapshot.is_available() {
            Self::Ok
        } else {
            Self::NoData
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::NoData => write!(f, "no-data"),
        }
    }
}

/// Result of the health query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when `data` is non-empty, otherwise `no-data`.
    pub status: HealthStatus,
    /// The latest snapshot (empty when unavailable).
    pub data: HealthSnapshot,
}

/// Result of the alerts query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertsResponse {
    /// The requested limit, echoed back as-is.
    pub count: i64,
    /// Number of events actually returned.
    pub returned: usize,
    /// Most recent events, oldest first.
    pub alerts: Vec<AlertEvent>,
}

/// Result of the healing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealingResponse {
    /// The requested limit, echoed back as-is.
    pub count: i64,
    /// Number of events actually returned.
    pub returned: usize,
    /// Most recent events, oldest first.
    pub events: Vec<HealingEvent>,
}

/// Result of the summary query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Whether a non-empty health snapshot exists.
    pub health_available: bool,
    /// Up to five most recent alert events.
    pub recent_alerts: Vec<AlertEvent>,
    /// Up to five most recent healing events.
    pub recent_healing: Vec<HealingEvent>,
}

impl HealthResponse {
    /// The `no-data` response.
    #[must_use]
    pub fn no_data() -> Self {
        Self {
            status: HealthStatus::NoData,
            data: HealthSnapshot::empty(),
        }
    }
}

impl AlertsResponse {
    /// An empty result that still echoes the requested limit.
    #[must_use]
    pub fn empty(count: i64) -> Self {
        Self {
            count,
            returned: 0,
            alerts: Vec::new(),
        }
    }
}

impl HealingResponse {
    /// An empty result that still echoes the requested limit.
    #[must_use]
    pub fn empty(count: i64) -> Self {
        Self {
            count,
            returned: 0,
            events: Vec::new(),
        }
    }
}

impl SummaryResponse {
    /// Summary with no health data and no recent events.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            health_available: false,
            recent_alerts: Vec::new(),
            recent_healing: Vec::new(),
        }
    }
}
