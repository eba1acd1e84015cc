//! Data models for the records the agent writes.
//!
//! This module contains the health snapshot, alert transition, and
//! self-healing event types.

pub mod alert;
pub mod healing;
pub mod health;

pub use alert::{AlertEvent, AlertKind, ALERT_FIELD_DELIMITER, ALERT_MIN_FIELDS};
pub use healing::{HealingEvent, HealingOutcome};
pub use health::HealthSnapshot;
