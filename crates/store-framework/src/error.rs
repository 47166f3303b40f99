//! # Framework Errors
//!
//! Errors raised by the store plumbing itself. Domain failures never show up here; a reducer
//! folds them into state.

/// Errors that can occur within the store framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Follow-up chain exceeded {limit} steps")]
    FollowUpLimit { limit: usize },
}
