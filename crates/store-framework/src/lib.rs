//! # Store Framework
//!
//! Building blocks for a unidirectional state-update loop on top of Tokio: a single owner of
//! application state, a pure-ish transition function, and asynchronous side effects that feed
//! their outcome back in as follow-up actions.
//!
//! ## Architecture Overview
//!
//! 1. **Decision Layer** ([`Reducer`]) - `(state, action, environment) -> Step { state, next }`
//! 2. **Runtime Layer** ([`StoreActor`]) - owns the state, applies requests one at a time
//! 3. **Interface Layer** ([`StoreClient`]) - cloneable handle for dispatch and observation
//!
//! You write the transition logic once in the reducer; the framework handles the queue,
//! follow-up chaining, publishing and shutdown.
//!
//! ## Dispatch Semantics
//!
//! - `dispatch(action)` resolves after the action **and every follow-up it produced** have been
//!   reduced. Follow-ups are fed back through an explicit loop, bounded by
//!   [`StoreOptions::max_follow_ups`], never by recursion.
//! - Requests from any number of clients are serialized through one bounded queue. A whole
//!   chain, including the effect awaited inside `reduce`, finishes before the next request is
//!   read, so no transition ever runs against a stale snapshot.
//! - Each step is published as soon as it is applied. Observers read it through
//!   [`StoreClient::current`], [`StoreClient::watch`] or [`StoreClient::subscribe`].
//!
//! ## Environment Injection
//!
//! Dependencies reach the reducer through `StoreActor::run(environment)`, not through the
//! constructor. The store can be created first and wired later, and the environment lives
//! exactly as long as the loop.
//!
//! ```rust
//! use async_trait::async_trait;
//! use store_framework::{Reducer, Step, StoreActor, StoreOptions};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self, name: &str) -> String { format!("Hello, {name}") }
//! }
//!
//! #[derive(Debug)]
//! enum Action { Greet(String) }
//!
//! struct Greeting;
//!
//! #[async_trait]
//! impl Reducer for Greeting {
//!     type State = Option<String>;
//!     type Action = Action;
//!     type Environment = Box<dyn Greeter>;
//!
//!     async fn reduce(
//!         &self,
//!         _state: &Option<String>,
//!         action: Action,
//!         env: &Self::Environment,
//!     ) -> Step<Option<String>, Action> {
//!         match action {
//!             Action::Greet(name) => Step::done(Some(env.greet(&name))),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::new(None, Greeting, StoreOptions::default());
//!     tokio::spawn(actor.run(Box::new(English)));
//!
//!     let state = client.dispatch(Action::Greet("Ada".into())).await.unwrap();
//!     assert_eq!(state.as_deref(), Some("Hello, Ada"));
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockStore`] hands out a real `StoreClient` answered from scripted expectations, for
//! testing feature clients without a running reducer.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod reducer;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{StoreActor, StoreOptions};
pub use client::StoreClient;
pub use client_trait::FeatureClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use reducer::{Reducer, Step};
