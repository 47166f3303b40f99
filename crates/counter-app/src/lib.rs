//! # Counter App Library
//!
//! The counter feature built on [`store_framework`]: state, actions, reducer, the remote sync
//! API, the feature client, navigation and the composition root. Exposed as a library so the
//! demo binary and the integration tests share it.

pub mod api;
pub mod clients;
pub mod config;
pub mod counter_store;
pub mod lifecycle;
pub mod model;
pub mod router;
