//! Alert transition model.
//!
//! Alert log lines are pipe-delimited:
//! `alert|state|host|value|threshold|timestamp[|...]`.

use serde::{Deserialize, Serialize};

/// Field delimiter used by the alert log.
pub const ALERT_FIELD_DELIMITER: char = '|';

/// Minimum number of fields a line needs to be accepted.
pub const ALERT_MIN_FIELDS: usize = 6;

/// One state transition in an alert's lifecycle.
///
/// All fields are kept as the opaque text the agent wrote.
///
/// # Example
///
/// ```
/// use shared::models::{AlertEvent, AlertKind};
///
/// let event = AlertEvent::parse_line("cpu_high|ALERT|host1|95|90|2024-01-01T00:00:00").unwrap();
/// assert_eq!(event.alert, "cpu_high");
/// assert_eq!(event.kind(), AlertKind::Alert);
///
/// assert!(AlertEvent::parse_line("bad|line").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    /// Alert rule name, e.g. `cpu_high`.
    pub alert: String,
    /// Transition state, e.g. `ALERT`, `RECOVERED`, `RECOVERY_FAILED`.
    pub state: String,
    /// Host the alert fired on.
    pub host: String,
    /// Observed value.
    pub value: String,
    /// Configured threshold.
    pub threshold: String,
    /// Timestamp as written by the agent.
    pub timestamp: String,
}

/// Display classification of an alert state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// The alert is (still) firing.
    Alert,
    /// The condition cleared.
    Recovered,
    /// Self-healing tried and failed to clear the condition.
    RecoveryFailed,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Recovered => write!(f, "recovered"),
            Self::RecoveryFailed => write!(f, "recovery-failed"),
        }
    }
}

impl AlertEvent {
    /// Parses one alert log line.
    ///
    /// The line is trimmed, then split on [`ALERT_FIELD_DELIMITER`]. Returns
    /// `None` for lines with fewer than [`ALERT_MIN_FIELDS`] fields; fields
    /// past the sixth are ignored.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(ALERT_FIELD_DELIMITER).collect();
        if fields.len() < ALERT_MIN_FIELDS {
            return None;
        }

        Some(Self {
            alert: fields[0].to_string(),
            state: fields[1].to_string(),
            host: fields[2].to_string(),
            value: fields[3].to_string(),
            threshold: fields[4].to_string(),
            timestamp: fields[5].to_string(),
        })
    }

    /// Classifies the state for display.
    #[must_use]
    pub fn kind(&self) -> AlertKind {
        if self.state == "RECOVERED" {
            AlertKind::Recovered
        } else if self.state.contains("RECOVERY_FAILED") {
            AlertKind::RecoveryFailed
        } else {
            AlertKind::Alert
        }
    }
}
