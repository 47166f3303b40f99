//! # Counter Store
//!
//! The counter feature expressed as a [`Reducer`](store_framework::Reducer): increment,
//! decrement and reset apply locally and immediately, then chain an internal `SendCounter`
//! action that mirrors the new value to the server and folds the outcome into `is_loading`
//! and `error`.
//!
//! ## Structure
//!
//! - [`reducer`] - [`CounterReducer`] and its [`CounterEnvironment`]
//! - [`error`] - [`CounterError`] for the feature client
//! - [`new()`] - factory that creates the store actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use counter_app::api::{ApiError, CounterApi};
//! use counter_app::counter_store::{self, CounterEnvironment};
//! use counter_app::model::{CounterAction, CounterActionKind};
//! use store_framework::StoreOptions;
//!
//! struct Offline;
//!
//! #[async_trait]
//! impl CounterApi for Offline {
//!     async fn send_counter(&self, _: CounterActionKind, _: i64) -> Result<(), ApiError> {
//!         Err(ApiError::Status { status: 503 })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = counter_store::new(StoreOptions::default());
//!     tokio::spawn(actor.run(CounterEnvironment::new(Arc::new(Offline))));
//!
//!     let state = client.dispatch(CounterAction::Increment).await.unwrap();
//!     assert_eq!(state.count, 1);
//!     assert!(!state.is_loading);
//!     assert_eq!(state.error.as_deref(), Some("Failed to send increment action to server"));
//! }
//! ```

pub mod error;
pub mod reducer;

pub use error::*;
pub use reducer::*;

use crate::model::CounterState;
use store_framework::{StoreActor, StoreClient, StoreOptions};

/// Creates a counter store starting at zero.
pub fn new(options: StoreOptions) -> (StoreActor<CounterReducer>, StoreClient<CounterReducer>) {
    with_state(CounterState::default(), options)
}

/// Creates a counter store starting from `initial`.
pub fn with_state(
    initial: CounterState,
    options: StoreOptions,
) -> (StoreActor<CounterReducer>, StoreClient<CounterReducer>) {
    StoreActor::new(initial, CounterReducer, options)
}
