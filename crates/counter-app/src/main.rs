//! # Counter Demo
//!
//! Walks the counter through a short session against the configured endpoint:
//!
//! 1.  Loads [`AppConfig`] and starts the [`CounterSystem`].
//! 2.  Increments twice and decrements once, logging each resulting state.
//! 3.  Opens the highlight screen with the current count, then navigates back.
//! 4.  Resets and shuts down.
//!
//! A failing endpoint does not stop the demo: the error shows up in state, like it would on
//! screen.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p counter-app
//! ```

use counter_app::config::AppConfig;
use counter_app::lifecycle::CounterSystem;
use counter_app::model::CounterState;
use store_framework::tracing::setup_tracing_with;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing_with(&config.logging.filter);

    info!(path = %AppConfig::config_path().display(), "Starting counter demo");

    let mut system = CounterSystem::new(&config).map_err(|e| e.to_string())?;
    let counter = system.counter_client.clone();

    let span = tracing::info_span!("counter_session");
    async {
        report("increment", counter.increment().await.map_err(|e| e.to_string())?);
        report("increment", counter.increment().await.map_err(|e| e.to_string())?);
        report("decrement", counter.decrement().await.map_err(|e| e.to_string())?);
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let route = system.highlight_current();
    info!(%route, depth = system.router.depth(), "Showing highlight");
    system.router.navigate_back();

    report("reset", counter.reset().await.map_err(|e| e.to_string())?);

    drop(counter);
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}

fn report(action: &str, state: CounterState) {
    match &state.error {
        None => info!(action, count = state.count, "Counter updated"),
        Some(error) => warn!(action, count = state.count, %error, "Counter updated, sync failed"),
    }
}
