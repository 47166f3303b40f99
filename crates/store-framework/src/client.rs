//! # Store Client
//!
//! The handle every caller uses to talk to a running `StoreActor`.

use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::reducer::Reducer;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

/// ## StoreClient
///
/// Forwards dispatches over the store's mpsc queue and awaits the reply on a oneshot channel.
/// It also carries read access to published state, so observers never have to queue behind
/// dispatches to render.
///
/// * **Cloneable** – cheap to clone and share across tasks.
/// * **Awaited dispatch** – `dispatch` resolves only after the whole follow-up chain ran.
/// * **Observation** – `current`, `watch` and `subscribe` read published state directly.
pub struct StoreClient<R: Reducer> {
    sender: mpsc::Sender<StoreRequest<R>>,
    watcher: watch::Receiver<R::State>,
    changes: broadcast::Sender<R::State>,
}

impl<R: Reducer> Clone for StoreClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            watcher: self.watcher.clone(),
            changes: self.changes.clone(),
        }
    }
}

impl<R: Reducer> StoreClient<R> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<R>>,
        watcher: watch::Receiver<R::State>,
        changes: broadcast::Sender<R::State>,
    ) -> Self {
        Self {
            sender,
            watcher,
            changes,
        }
    }

    /// Applies `action` and every follow-up it produces; returns the state after the last step.
    pub async fn dispatch(&self, action: R::Action) -> Result<R::State, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Dispatch { action, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// State as seen by the store loop, after every request queued ahead of this one.
    pub async fn state(&self) -> Result<R::State, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::GetState { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Latest published state, without waiting on the queue.
    pub fn current(&self) -> R::State {
        self.watcher.borrow().clone()
    }

    /// Latest-value view of the state. Intermediate steps may be coalesced.
    pub fn watch(&self) -> watch::Receiver<R::State> {
        self.watcher.clone()
    }

    /// Every state published from now on, in order.
    pub fn subscribe(&self) -> broadcast::Receiver<R::State> {
        self.changes.subscribe()
    }
}
