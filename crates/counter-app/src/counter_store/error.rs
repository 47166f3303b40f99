//! Error types for the counter feature client.

use store_framework::StoreError;
use thiserror::Error;

/// Errors surfaced by [`CounterClient`](crate::clients::CounterClient).
///
/// Sync failures are not errors here: they land in `CounterState::error`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CounterError {
    /// The counter store could not be reached or cut a follow-up chain short.
    #[error("Counter store error: {0}")]
    Store(#[from] StoreError),
}
