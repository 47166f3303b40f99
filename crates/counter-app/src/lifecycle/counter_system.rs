use std::sync::Arc;
use tracing::{error, info, warn};

use crate::api::{ApiError, CounterApi, LiveCounterApi};
use crate::clients::CounterClient;
use crate::config::{AppConfig, StoreConfig};
use crate::counter_store::{self, CounterEnvironment, CHAIN_DEPTH};
use crate::router::{Route, Router};

/// Composition root for the counter application.
///
/// `CounterSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the counter store
/// - **Dependency Wiring**: injecting the API into the store's environment
/// - **Navigation**: owning the [`Router`] the counter screen pushes onto
///
/// # Example
///
/// ```ignore
/// let system = CounterSystem::new(&AppConfig::load()?)?;
///
/// system.counter_client.increment().await?;
/// system.highlight_current();
///
/// system.shutdown().await?;
/// ```
pub struct CounterSystem {
    /// Client for the counter store
    pub counter_client: CounterClient,

    pub router: Router,

    /// Store task handle (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CounterSystem {
    /// Builds the live HTTP API from `config` and starts the store.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let api = LiveCounterApi::new(&config.api)?;
        info!(url = %api.url(), include_action = config.api.include_action, "Using live counter API");
        Ok(Self::with_api(Arc::new(api), &config.store))
    }

    /// Starts the store with an injected API.
    ///
    /// `max_follow_ups` is raised to [`CHAIN_DEPTH`] so a sync outcome is never dropped.
    pub fn with_api(api: Arc<dyn CounterApi>, store: &StoreConfig) -> Self {
        let mut options = store.options();
        if options.max_follow_ups < CHAIN_DEPTH {
            warn!(
                configured = options.max_follow_ups,
                required = CHAIN_DEPTH,
                "max_follow_ups too small for the counter chain, raising it"
            );
            options.max_follow_ups = CHAIN_DEPTH;
        }

        // 1. Create the store (no dependencies yet)
        let (actor, store_client) = counter_store::new(options);

        // 2. Start it with the environment injected
        let handle = tokio::spawn(actor.run(CounterEnvironment::new(api)));

        Self {
            counter_client: CounterClient::new(store_client),
            router: Router::new(),
            handle,
        }
    }

    /// Opens the highlight screen for the count currently on display.
    pub fn highlight_current(&mut self) -> Route {
        let route = Route::CountHighlight {
            count: self.counter_client.current().count,
        };
        self.router.navigate(route);
        route
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the store's queue; the loop drains what is already queued
    /// and exits. Returns an error if the store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down counter system...");

        drop(self.counter_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Counter system shutdown complete.");
        Ok(())
    }
}
