//! # Mock Store & Testing Guide
//!
//! `MockStore<R>` hands out a real `StoreClient<R>` whose requests are answered from a queue of
//! expectations instead of a running reducer. Use it to unit-test feature clients (the code
//! *around* a store) without spawning a `StoreActor`.
//!
//! | Feature | MockStore | Real StoreActor |
//! |---------|-----------|-----------------|
//! | **State** | Canned replies | Real reducer + environment |
//! | **Determinism** | Fully scripted | Depends on the environment |
//! | **Use Case** | Client wrappers, presentation glue | Reducer logic, full system |
//! | **Error Injection** | `return_err` | Needs a failing environment |
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_framework::mock::MockStore;
//! use store_framework::{Reducer, Step, StoreError};
//!
//! #[derive(Debug)]
//! enum Action { Bump }
//!
//! struct Bumper;
//!
//! #[async_trait]
//! impl Reducer for Bumper {
//!     type State = u8;
//!     type Action = Action;
//!     type Environment = ();
//!     async fn reduce(&self, s: &u8, _: Action, _: &()) -> Step<u8, Action> { Step::done(s + 1) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Bumper>::new(0);
//!     mock.expect_dispatch().return_ok(7);
//!     mock.expect_dispatch().return_err(StoreError::StoreClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.dispatch(Action::Bump).await, Ok(7));
//!     assert_eq!(client.dispatch(Action::Bump).await, Err(StoreError::StoreClosed));
//!
//!     assert_eq!(mock.take_dispatched().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! For step-by-step control use [`create_mock_client`] together with [`expect_dispatch`] and
//! [`expect_get_state`], and answer each request yourself.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{Response, StoreRequest};
use crate::reducer::Reducer;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc, watch};

/// Represents an expected request to the mock store.
enum Expectation<R: Reducer> {
    Dispatch {
        response: Result<R::State, StoreError>,
    },
    GetState {
        response: Result<R::State, StoreError>,
    },
}

/// A mock store with expectation tracking for fluent testing.
///
/// Every dispatched action is recorded and can be inspected with
/// [`take_dispatched`](Self::take_dispatched).
pub struct MockStore<R: Reducer> {
    client: StoreClient<R>,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
    dispatched: Arc<Mutex<Vec<R::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<R: Reducer> MockStore<R> {
    /// Creates a new mock with no expectations. `initial_state` is what
    /// [`StoreClient::current`] reports.
    pub fn new(initial_state: R::State) -> Self {
        let (client, mut receiver) = create_mock_client::<R>(100, initial_state);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::Dispatch { action, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::GetState { respond_to }, Some(Expectation::GetState { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client,
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient<R> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<R> {
        ExpectationBuilder {
            kind: ExpectationKind::Dispatch,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `state` request.
    pub fn expect_state(&mut self) -> ExpectationBuilder<R> {
        ExpectationBuilder {
            kind: ExpectationKind::GetState,
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the actions dispatched so far, in arrival order.
    pub fn take_dispatched(&self) -> Vec<R::Action> {
        std::mem::take(&mut *self.dispatched.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

enum ExpectationKind {
    Dispatch,
    GetState,
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<R: Reducer> {
    kind: ExpectationKind,
    expectations: Arc<Mutex<VecDeque<Expectation<R>>>>,
}

impl<R: Reducer> ExpectationBuilder<R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: R::State) {
        self.push(Ok(state));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R::State, StoreError>) {
        let expectation = match self.kind {
            ExpectationKind::Dispatch => Expectation::Dispatch { response },
            ExpectationKind::GetState => Expectation::GetState { response },
        };
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// Nothing answers requests until the test pulls them off `receiver` (see [`expect_dispatch`]),
/// which makes it possible to assert exactly what a client sends and to script delays or
/// failures. `current()` on the returned client keeps reporting `initial_state`.
pub fn create_mock_client<R: Reducer>(
    buffer_size: usize,
    initial_state: R::State,
) -> (StoreClient<R>, mpsc::Receiver<StoreRequest<R>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    let (_published, watcher) = watch::channel(initial_state);
    let (changes, _) = broadcast::channel(16);
    (StoreClient::new(sender, watcher, changes), receiver)
}

/// Helper to verify that the next request is a Dispatch.
pub async fn expect_dispatch<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<(R::Action, Response<R::State>)> {
    match receiver.recv().await {
        Some(StoreRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a GetState.
pub async fn expect_get_state<R: Reducer>(
    receiver: &mut mpsc::Receiver<StoreRequest<R>>,
) -> Option<Response<R::State>> {
    match receiver.recv().await {
        Some(StoreRequest::GetState { respond_to }) => Some(respond_to),
        _ => None,
    }
}
