//! Type-safe wrappers around [`StoreClient`](store_framework::StoreClient).

pub mod counter_client;

pub use counter_client::*;
