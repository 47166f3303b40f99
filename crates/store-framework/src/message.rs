//! # Store Messages
//!
//! Requests sent from a `StoreClient` to the `StoreActor`, each carrying a oneshot channel for
//! the reply.

use crate::error::StoreError;
use crate::reducer::Reducer;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store loop.
///
/// - **Dispatch**: apply an action and every follow-up it produces, then reply with the
///   resulting state.
/// - **GetState**: reply with the state as seen by the loop, i.e. after every request queued
///   ahead of this one has been applied.
#[derive(Debug)]
pub enum StoreRequest<R: Reducer> {
    Dispatch {
        action: R::Action,
        respond_to: Response<R::State>,
    },
    GetState {
        respond_to: Response<R::State>,
    },
}
