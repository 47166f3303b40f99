//! # Counter API
//!
//! The one remote capability the counter needs: "the counter is now at N because of this
//! action". The store only ever sees the [`CounterApi`] trait, injected through
//! [`CounterEnvironment`](crate::counter_store::CounterEnvironment); [`LiveCounterApi`] is the
//! HTTP implementation wired in by the composition root.
//!
//! Any 2xx answer is success. Everything else, including transport failures, is an
//! [`ApiError`], and the reducer treats every error the same way.

mod error;
mod live;

pub use error::*;
pub use live::*;

use crate::model::CounterActionKind;
use async_trait::async_trait;

/// Sends the current count to a remote collaborator.
#[async_trait]
pub trait CounterApi: Send + Sync {
    async fn send_counter(&self, action: CounterActionKind, count: i64) -> Result<(), ApiError>;
}
