//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::config::LogSources;
use shared::query::QueryService;
use tokio::task::JoinError;

/// Application state shared across all request handlers.
///
/// Holds the query service over the agent logs. There is no other state:
/// every request re-reads the logs.
#[derive(Clone)]
pub struct AppState {
    service: QueryService,
}

impl AppState {
    /// Creates a new application state around the given service.
    #[must_use]
    pub fn new(service: QueryService) -> Self {
        Self { service }
    }

    /// Creates a new application state reading the logs at `sources`.
    #[must_use]
    pub fn from_sources(sources: LogSources) -> Self {
        Self::new(QueryService::from_sources(sources))
    }

    /// Returns a reference to the query service.
    #[must_use]
    pub fn service(&self) -> &QueryService {
        &self.service
    }

    /// Runs `query` against the service on the blocking thread pool.
    ///
    /// Log reads are synchronous file I/O. Running them off the async workers
    /// keeps a stalled read from holding a worker, so a request timeout layered
    /// above the handler can still fire.
    ///
    /// # Errors
    ///
    /// Returns the [`JoinError`] if the query panicked or was cancelled.
    pub async fn query<T, F>(&self, query: F) -> Result<T, JoinError>
    where
        F: FnOnce(&QueryService) -> T + Send + 'static,
        T: Send + 'static,
    {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || query(&service))
            .await
            .inspect_err(|error| tracing::error!(error = %error, "Log query task failed"))
    }
}
