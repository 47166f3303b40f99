//! [`Reducer`] implementation for the counter.

use async_trait::async_trait;
use std::sync::Arc;
use store_framework::{Reducer, Step};

use crate::api::CounterApi;
use crate::model::{CounterAction, CounterActionKind, CounterState};

/// Dependencies handed to every counter transition.
#[derive(Clone)]
pub struct CounterEnvironment {
    pub api: Arc<dyn CounterApi>,
}

impl CounterEnvironment {
    pub fn new(api: Arc<dyn CounterApi>) -> Self {
        Self { api }
    }
}

/// Follow-ups a counter change produces: `SendCounter`, then its outcome.
///
/// A store capped below this drops the outcome step and leaves `is_loading` set.
pub const CHAIN_DEPTH: usize = 2;

/// Message stored in state when mirroring `action` to the server fails.
pub fn sync_error_message(action: CounterActionKind) -> String {
    format!("Failed to send {action} action to server")
}

/// Counter transitions.
///
/// A counter change is applied optimistically and chains the remote sync:
///
/// ```text
/// Increment ──▶ SendCounter { Increment, n } ──▶ SetLoading(false)
///                                          └──▶ SetError(Some("Failed to send increment action to server"))
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

#[async_trait]
impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    async fn reduce(
        &self,
        state: &CounterState,
        action: CounterAction,
        env: &CounterEnvironment,
    ) -> Step<CounterState, CounterAction> {
        let mut next = state.clone();
        match action {
            CounterAction::Increment => change(next, CounterActionKind::Increment),
            CounterAction::Decrement => change(next, CounterActionKind::Decrement),
            CounterAction::Reset => change(next, CounterActionKind::Reset),

            CounterAction::SendCounter { action, count } => {
                match env.api.send_counter(action, count).await {
                    Ok(()) => Step::then(next, CounterAction::SetLoading(false)),
                    Err(e) => {
                        tracing::warn!(%action, count, error = %e, "Counter sync failed");
                        Step::then(next, CounterAction::SetError(Some(sync_error_message(action))))
                    }
                }
            }

            CounterAction::SetLoading(is_loading) => {
                next.is_loading = is_loading;
                Step::done(next)
            }

            CounterAction::SetError(error) => {
                next.error = error;
                next.is_loading = false;
                Step::done(next)
            }
        }
    }
}

fn change(mut next: CounterState, kind: CounterActionKind) -> Step<CounterState, CounterAction> {
    next.count = kind.apply(next.count);
    next.error = None;
    next.is_loading = true;
    let count = next.count;
    Step::then(next, CounterAction::SendCounter { action: kind, count })
}
