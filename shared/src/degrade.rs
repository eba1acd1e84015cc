//! Attempt-and-degrade for log reads.
//!
//! Every source boundary funnels its `Result` through [`degrade`], which turns
//! any failure into the empty value for that source. Callers downstream only
//! ever see "data" or "no data".

use crate::storage::LogReadError;

/// Unwraps a read result, substituting `T::default()` on error.
///
/// A missing file is an ordinary state (the agent may not have run yet) and
/// is logged at `debug`. Anything else is logged at `warn`.
///
/// # Example
///
/// ```
/// use shared::degrade::degrade;
/// use shared::models::AlertEvent;
///
/// let events: Vec<AlertEvent> = degrade(Ok(Vec::new()));
/// assert!(events.is_empty());
/// ```
pub fn degrade<T: Default>(result: Result<T, LogReadError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) if err.is_not_found() => {
            tracing::debug!(
                source = %err.log(),
                path = %err.path().display(),
                "Log source not present, returning empty result"
            );
            T::default()
        }
        Err(err) => {
            tracing::warn!(
                source = %err.log(),
                path = %err.path().display(),
                error = %err,
                "Log source unreadable, returning empty result"
            );
            T::default()
        }
    }
}
