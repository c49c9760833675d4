//! Mock provider implementation for testing.

use super::{Credentials, ProviderError, SearchProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock search provider that answers every call with a fixed outcome and
/// remembers what it was asked.
pub struct MockSearchProvider {
    outcome: Result<serde_json::Value, ProviderError>,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl MockSearchProvider {
    pub fn returning(payload: serde_json::Value) -> Self {
        Self::with_outcome(Ok(payload))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<serde_json::Value, ProviderError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Number of searches executed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(
        &self,
        query: &str,
        _credentials: &Credentials,
    ) -> Result<serde_json::Value, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_query.lock() {
            *last = Some(query.to_string());
        }

        self.outcome.clone()
    }
}
