//! # Counter Client
//!
//! High-level API for the counter store. Wraps a `StoreClient<CounterReducer>` and exposes one
//! method per user intent, so presentation code never builds actions by hand.
use crate::counter_store::{CounterError, CounterReducer};
use crate::model::{CounterAction, CounterState};
use store_framework::{FeatureClient, StoreClient, StoreError};
use tokio::sync::broadcast;
use tracing::{debug, instrument};

/// Client for the counter store.
#[derive(Clone)]
pub struct CounterClient {
    inner: StoreClient<CounterReducer>,
}

impl CounterClient {
    pub fn new(inner: StoreClient<CounterReducer>) -> Self {
        Self { inner }
    }
}

impl FeatureClient<CounterReducer> for CounterClient {
    type Error = CounterError;

    fn inner(&self) -> &StoreClient<CounterReducer> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        CounterError::Store(e)
    }
}

impl CounterClient {
    /// Adds one and mirrors the new count. Resolves once the sync outcome is in state.
    #[instrument(skip(self))]
    pub async fn increment(&self) -> Result<CounterState, CounterError> {
        self.send(CounterAction::Increment).await
    }

    /// Subtracts one and mirrors the new count.
    #[instrument(skip(self))]
    pub async fn decrement(&self) -> Result<CounterState, CounterError> {
        self.send(CounterAction::Decrement).await
    }

    /// Sets the count to zero and mirrors it.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<CounterState, CounterError> {
        self.send(CounterAction::Reset).await
    }

    #[instrument(skip(self))]
    pub async fn set_loading(&self, is_loading: bool) -> Result<CounterState, CounterError> {
        self.send(CounterAction::SetLoading(is_loading)).await
    }

    /// Dismisses the current error message, if any.
    #[instrument(skip(self))]
    pub async fn clear_error(&self) -> Result<CounterState, CounterError> {
        debug!("Clearing error");
        self.send(CounterAction::SetError(None)).await
    }

    /// Latest published state, for rendering.
    pub fn current(&self) -> CounterState {
        self.inner.current()
    }

    /// Every state the store publishes from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<CounterState> {
        self.inner.subscribe()
    }
}
