//! Self-healing event model.

use serde::{Deserialize, Serialize};

/// One free-text record of a self-healing action.
///
/// Serialized as a bare JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealingEvent(String);

/// Display classification of a healing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealingOutcome {
    /// The action reported success.
    Success,
    /// The action reported a failure.
    Failure,
    /// Neither marker is present.
    Neutral,
}

impl std::fmt::Display for HealingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "error"),
            Self::Neutral => write!(f, "info"),
        }
    }
}

impl HealingEvent {
    /// Builds an event from a raw log line, trimming surrounding whitespace.
    ///
    /// Lines that trim to nothing are kept as empty events.
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        Self(line.trim().to_string())
    }

    /// The event text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Classifies the record by its success/failure markers.
    ///
    /// Success markers win when both are present.
    #[must_use]
    pub fn outcome(&self) -> HealingOutcome {
        if self.0.contains("successful") || self.0.contains("SUCCESS") {
            HealingOutcome::Success
        } else if self.0.contains("failed") || self.0.contains("ERROR") {
            HealingOutcome::Failure
        } else {
            HealingOutcome::Neutral
        }
    }
}

impl std::fmt::Display for HealingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HealingEvent {
    fn from(line: &str) -> Self {
        Self::from_line(line)
    }
}
