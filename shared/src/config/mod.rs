//! Configuration module for the LOCC status service.
//!
//! This module contains the log source locations read by the log store.

pub mod log_sources;

pub use log_sources::{
    LogSource, LogSources, DEFAULT_ALERT_LOG, DEFAULT_HEALING_LOG, DEFAULT_HEALTH_LOG,
};
