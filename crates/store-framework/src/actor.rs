//! # Store Loop
//!
//! This module defines the `StoreActor`, the server side of a store. It owns the state and the
//! receiving end of the request queue, and applies requests strictly one at a time.
//!
//! A dispatch is applied end-to-end before the next request is read: the action, the effect
//! awaited inside the reducer, and every follow-up the chain produces. Concurrent callers
//! therefore never see their actions reduced against a stale snapshot.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::reducer::Reducer;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info, warn};

/// Tuning knobs for a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Capacity of the request queue. When full, `dispatch` waits for space.
    pub buffer_size: usize,
    /// Maximum number of follow-up actions a single dispatch may chain.
    pub max_follow_ups: usize,
    /// How many published states a slow subscriber may fall behind before it lags.
    pub broadcast_capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            max_follow_ups: 8,
            broadcast_capacity: 64,
        }
    }
}

/// The single writer of a piece of application state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the `actor` (server) and a `client` (handle).
/// 2.  **Wire**: pass the reducer's environment into `actor.run(environment)`.
/// 3.  **Run**: spawn the loop in a background task and talk to it through the client.
///
/// ```rust
/// use async_trait::async_trait;
/// use store_framework::{Reducer, Step, StoreActor, StoreOptions};
///
/// #[derive(Debug)]
/// enum Action { Increment }
///
/// struct Counter;
///
/// #[async_trait]
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = Action;
///     type Environment = ();
///
///     async fn reduce(&self, state: &i64, action: Action, _: &()) -> Step<i64, Action> {
///         match action {
///             Action::Increment => Step::done(state + 1),
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(0, Counter, StoreOptions::default());
///     tokio::spawn(actor.run(()));
///
///     let state = client.dispatch(Action::Increment).await.unwrap();
///     assert_eq!(state, 1);
///     assert_eq!(client.current(), 1);
/// }
/// ```
///
/// # Publishing
///
/// Every step is published before the next follow-up is reduced: the latest value goes to
/// the `watch` channel behind [`StoreClient::current`], and every value goes to the
/// `broadcast` channel behind [`StoreClient::subscribe`].
pub struct StoreActor<R: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    reducer: R,
    state: R::State,
    published: watch::Sender<R::State>,
    changes: broadcast::Sender<R::State>,
    max_follow_ups: usize,
}

impl<R: Reducer> StoreActor<R> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// Zero capacities are raised to one.
    pub fn new(initial_state: R::State, reducer: R, options: StoreOptions) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(options.buffer_size.max(1));
        let (published, watcher) = watch::channel(initial_state.clone());
        let (changes, _) = broadcast::channel(options.broadcast_capacity.max(1));

        let client = StoreClient::new(sender, watcher, changes.clone());
        let actor = Self {
            receiver,
            reducer,
            state: initial_state,
            published,
            changes,
            max_follow_ups: options.max_follow_ups,
        };
        (actor, client)
    }

    /// Runs the store loop, processing requests until every client has been dropped.
    ///
    /// # Environment Injection
    /// `environment` is handed to every `reduce` call. It is bound here rather than in
    /// `new()` so the store can be created before its dependencies exist.
    pub async fn run(mut self, environment: R::Environment) {
        // "CounterState" rather than "counter_app::model::counter::CounterState"
        let state_type = std::any::type_name::<R::State>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { action, respond_to } => {
                    let result = self.apply(action, &environment, state_type).await;
                    let _ = respond_to.send(result);
                }
                StoreRequest::GetState { respond_to } => {
                    debug!(state_type, "GetState");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, state = ?self.state, "Store stopped");
    }

    /// Reduces `action` and then each follow-up in turn, publishing after every step.
    async fn apply(
        &mut self,
        action: R::Action,
        environment: &R::Environment,
        state_type: &str,
    ) -> Result<R::State, StoreError> {
        let mut pending = Some(action);
        let mut follow_ups = 0;

        while let Some(action) = pending.take() {
            debug!(state_type, step = follow_ups, ?action, "Reduce");
            let step = self.reducer.reduce(&self.state, action, environment).await;
            self.publish(step.state);

            if let Some(next) = step.next {
                if follow_ups == self.max_follow_ups {
                    warn!(
                        state_type,
                        limit = self.max_follow_ups,
                        ?next,
                        "Follow-up limit reached, dropping rest of chain"
                    );
                    return Err(StoreError::FollowUpLimit {
                        limit: self.max_follow_ups,
                    });
                }
                follow_ups += 1;
                pending = Some(next);
            }
        }

        debug!(state_type, follow_ups, state = ?self.state, "Dispatch complete");
        Ok(self.state.clone())
    }

    fn publish(&mut self, state: R::State) {
        self.state = state;
        self.published.send_replace(self.state.clone());
        // No subscribers is not an error.
        let _ = self.changes.send(self.state.clone());
    }
}
