//! # System Lifecycle & Wiring
//!
//! The store and its collaborators are simple on their own; this module is where they are
//! put together.
//!
//! 1. **Store Creation** - instantiate the counter store and its client
//! 2. **Environment Injection** - hand the API to the store via `run(environment)`
//! 3. **Navigation** - own the router the counter screen pushes routes onto
//! 4. **Graceful Shutdown** - drop the client, await the store task
//!
//! ## Environment Injection
//!
//! The store is created before its environment exists and receives it when the loop starts:
//!
//! ```rust,ignore
//! let (actor, store_client) = counter_store::new(options);
//! let handle = tokio::spawn(actor.run(CounterEnvironment::new(api)));
//! ```
//!
//! Tests use [`CounterSystem::with_api`] to swap the live HTTP API for a fake one without
//! touching anything else.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the store's queue
//! 2. **Store drains** - requests already queued are still applied
//! 3. **Await completion** - the store logs its final state and the task ends
//!
//! Clones of the client handed out elsewhere keep the store alive until they are dropped
//! too.

pub mod counter_system;

pub use counter_system::*;
