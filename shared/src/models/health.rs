//! Health snapshot model.
//!
//! The agent writes one JSON object per line to its health log. The field set
//! belongs to the agent, so the snapshot is kept as an ordered, loosely typed
//! mapping rather than a fixed structure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The most recent monitoring sample recorded by the agent.
///
/// An empty snapshot means "unavailable": the log is missing, empty, or its
/// last line was not a JSON object.
///
/// # Example
///
/// ```
/// use shared::models::HealthSnapshot;
///
/// let snapshot = HealthSnapshot::parse_line(r#"{"hostname": "web-1", "cpu": {"usage_percent": 12.5}}"#)
///     .unwrap();
///
/// assert!(snapshot.is_available());
/// assert_eq!(snapshot.hostname(), Some("web-1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthSnapshot(Map<String, Value>);

impl HealthSnapshot {
    /// Creates an empty (unavailable) snapshot.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a single health log line.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid JSON, or is valid JSON but not
    /// an object.
    pub fn parse_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Map<String, Value>>(line).map(Self)
    }

    /// Returns `true` if the snapshot carries at least one field.
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.0.is_empty()
    }

    /// Returns `true` if the snapshot has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a nested field by a path of keys, e.g. `["cpu", "usage_percent"]`.
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(key))
    }

    /// The reporting host, if the agent included one.
    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.get("hostname").and_then(Value::as_str)
    }

    /// System uptime in seconds, from `system.uptime_seconds`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn uptime_seconds(&self) -> Option<u64> {
        let value = self.pointer(&["system", "uptime_seconds"])?;
        value
            .as_u64()
            .or_else(|| value.as_f64().filter(|s| *s >= 0.0).map(|s| s as u64))
    }

    /// Iterates over the top-level fields in the order the agent wrote them.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}
