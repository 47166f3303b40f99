//! # Observability & Tracing
//!
//! Subscriber setup shared by every binary built on the framework.
//!
//! The store loop logs with structured fields and a `state_type` field naming the state it
//! owns:
//!
//! - `info`: store started / stopped (with the final state)
//! - `debug`: every reduce step with its action, and the state after each dispatch
//! - `warn`: follow-up chains cut short by the limit
//!
//! ```bash
//! RUST_LOG=info cargo run       # lifecycle only
//! RUST_LOG=debug cargo run      # every step
//! RUST_LOG=store_framework=debug,counter_app=info cargo run
//! ```
//!
//! With `RUST_LOG=debug` a single increment reads:
//!
//! ```text
//! DEBUG Reduce state_type="CounterState" step=0 action=Increment
//! DEBUG Reduce state_type="CounterState" step=1 action=SendCounter { action: Increment, count: 1 }
//! DEBUG Reduce state_type="CounterState" step=2 action=SetLoading(false)
//! DEBUG Dispatch complete state_type="CounterState" follow_ups=2 state=CounterState { count: 1, is_loading: false, error: None }
//! ```

use tracing_subscriber::EnvFilter;

/// Installs a compact subscriber filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], falling back to `default_filter` when `RUST_LOG` is unset or invalid.
pub fn setup_tracing_with(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
