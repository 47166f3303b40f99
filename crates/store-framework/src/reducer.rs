//! # Reducer Trait
//!
//! The `Reducer` trait is the single decision point of a store. Given the current state, an
//! action and the injected environment, it produces the next state and, optionally, one
//! follow-up action that the store feeds straight back into the same reducer.
//!
//! # Effects
//!
//! `reduce` is async. A transition that needs to talk to the outside world (e.g. an HTTP
//! call through the environment) awaits it inline and branches on the outcome before
//! returning. That awaited call *is* the effect: at most one per step, and its only way to
//! influence the store is the follow-up action it returns.
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_framework::{Reducer, Step};
//!
//! #[derive(Debug)]
//! enum Action { Add(i64), Double }
//!
//! struct Calc;
//!
//! #[async_trait]
//! impl Reducer for Calc {
//!     type State = i64;
//!     type Action = Action;
//!     type Environment = ();
//!
//!     async fn reduce(&self, state: &i64, action: Action, _env: &()) -> Step<i64, Action> {
//!         match action {
//!             // Adding always doubles afterwards.
//!             Action::Add(n) => Step::then(state + n, Action::Double),
//!             Action::Double => Step::done(state * 2),
//!         }
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

/// Result of a single transition: the state that replaces the current one wholesale,
/// plus an optional follow-up action.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S, A> {
    pub state: S,
    pub next: Option<A>,
}

impl<S, A> Step<S, A> {
    /// A terminal step: no follow-up.
    pub fn done(state: S) -> Self {
        Self { state, next: None }
    }

    /// A step that chains `next` through the reducer before the dispatch completes.
    pub fn then(state: S, next: A) -> Self {
        Self {
            state,
            next: Some(next),
        }
    }
}

/// Transition function managed by a [`StoreActor`](crate::StoreActor).
///
/// # Associated Types
/// - `State` is owned exclusively by the store and is only ever replaced by the `state`
///   returned from `reduce`.
/// - `Action` is a closed set of variants. Match it exhaustively; there is no runtime
///   fallback for unknown actions.
/// - `Environment` is the bag of dependencies injected via
///   [`StoreActor::run`](crate::StoreActor::run). It is shared read-only for the lifetime
///   of the loop.
#[async_trait]
pub trait Reducer: Send + Sync + 'static {
    type State: Clone + Debug + Send + Sync + 'static;

    type Action: Debug + Send + 'static;

    /// Use `()` if the reducer needs no dependencies.
    type Environment: Send + Sync + 'static;

    /// Compute the next state and optional follow-up for `action`.
    ///
    /// Must not fail: anything that can go wrong inside an effect is folded into the
    /// returned state or follow-up action.
    async fn reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Step<Self::State, Self::Action>;
}
