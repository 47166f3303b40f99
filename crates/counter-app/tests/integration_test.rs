use async_trait::async_trait;
use counter_app::api::{ApiError, CounterApi};
use counter_app::config::StoreConfig;
use counter_app::counter_store::{self, CounterEnvironment};
use counter_app::lifecycle::CounterSystem;
use counter_app::model::{CounterAction, CounterActionKind, CounterState};
use counter_app::router::Route;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use store_framework::{FeatureClient, StoreOptions};

/// Records every sync and fails while `failing` is set.
#[derive(Default)]
struct RecordingApi {
    failing: AtomicBool,
    delay: Option<Duration>,
    calls: Mutex<Vec<(CounterActionKind, i64)>>,
}

impl RecordingApi {
    fn failing() -> Self {
        Self {
            failing: AtomicBool::new(true),
            ..Self::default()
        }
    }

    fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<(CounterActionKind, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CounterApi for RecordingApi {
    async fn send_counter(&self, action: CounterActionKind, count: i64) -> Result<(), ApiError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.calls.lock().unwrap().push((action, count));
        if self.failing.load(Ordering::SeqCst) {
            Err(ApiError::Status { status: 500 })
        } else {
            Ok(())
        }
    }
}

fn system_with(api: Arc<RecordingApi>) -> CounterSystem {
    CounterSystem::with_api(api, &StoreConfig::default())
}

#[tokio::test]
async fn test_failed_sync_keeps_local_count_and_reports_error() {
    let api = Arc::new(RecordingApi::failing());
    let system = system_with(api.clone());

    let state = system.counter_client.increment().await.unwrap();

    assert_eq!(state.count, 1);
    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to send increment action to server")
    );
    assert_eq!(api.calls(), vec![(CounterActionKind::Increment, 1)]);

    system.shutdown().await.unwrap();
}

/// A follow-up cap below the counter chain depth still lets the sync outcome land.
#[tokio::test]
async fn test_small_follow_up_cap_keeps_failure_semantics() {
    let api = Arc::new(RecordingApi::failing());
    let store = StoreConfig {
        buffer_size: 32,
        max_follow_ups: 1,
    };
    let system = CounterSystem::with_api(api.clone(), &store);

    let state = system.counter_client.increment().await.unwrap();

    assert_eq!(state.count, 1);
    assert!(!state.is_loading);
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to send increment action to server")
    );
    assert_eq!(system.counter_client.state().await.unwrap(), state);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_increment_then_decrement_round_trips() {
    let api = Arc::new(RecordingApi::default());
    let system = system_with(api.clone());

    let after_increment = system.counter_client.increment().await.unwrap();
    assert_eq!(
        after_increment,
        CounterState {
            count: 1,
            is_loading: false,
            error: None
        }
    );

    let after_decrement = system.counter_client.decrement().await.unwrap();
    assert_eq!(after_decrement, CounterState::default());

    assert_eq!(
        api.calls(),
        vec![
            (CounterActionKind::Increment, 1),
            (CounterActionKind::Decrement, 0),
        ]
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset_clears_loading_and_error() {
    let api = Arc::new(RecordingApi::default());
    let initial = CounterState {
        count: 5,
        is_loading: true,
        error: Some("x".to_string()),
    };
    let (actor, client) = counter_store::with_state(initial, StoreOptions::default());
    let handle = tokio::spawn(actor.run(CounterEnvironment::new(api.clone())));

    let state = client.dispatch(CounterAction::Reset).await.unwrap();

    assert_eq!(state, CounterState::default());
    assert_eq!(api.calls(), vec![(CounterActionKind::Reset, 0)]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_count_is_sum_of_changes() {
    let api = Arc::new(RecordingApi::default());
    let system = system_with(api.clone());
    let counter = &system.counter_client;

    counter.increment().await.unwrap();
    counter.increment().await.unwrap();
    counter.increment().await.unwrap();
    counter.decrement().await.unwrap();
    let state = counter.decrement().await.unwrap();
    assert_eq!(state.count, 1);

    let state = counter.decrement().await.unwrap();
    let state_below_zero = counter.decrement().await.unwrap();
    assert_eq!(state.count, 0);
    assert_eq!(state_below_zero.count, -1);

    let counts: Vec<i64> = api.calls().into_iter().map(|(_, count)| count).collect();
    assert_eq!(counts, vec![1, 2, 3, 2, 1, 0, -1]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_set_loading_is_idempotent() {
    let system = system_with(Arc::new(RecordingApi::default()));
    let counter = &system.counter_client;

    let once = counter.set_loading(true).await.unwrap();
    let twice = counter.set_loading(true).await.unwrap();
    assert_eq!(once, twice);
    assert!(twice.is_loading);

    let off = counter.set_loading(false).await.unwrap();
    assert!(!off.is_loading);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_clear_error_after_failed_sync() {
    let api = Arc::new(RecordingApi::failing());
    let system = system_with(api.clone());

    let failed = system.counter_client.increment().await.unwrap();
    assert!(failed.error.is_some());

    let cleared = system.counter_client.clear_error().await.unwrap();
    assert_eq!(cleared.error, None);
    assert_eq!(cleared.count, 1);

    api.failing.store(false, Ordering::SeqCst);
    let recovered = system.counter_client.increment().await.unwrap();
    assert_eq!(recovered.count, 2);
    assert_eq!(recovered.error, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_increments_are_not_lost() {
    let api = Arc::new(RecordingApi::slow(Duration::from_millis(2)));
    let system = system_with(api.clone());

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let counter = system.counter_client.clone();
            tokio::spawn(async move { counter.increment().await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let state = system.counter_client.state().await.unwrap();
    assert_eq!(state.count, 10);
    assert!(!state.is_loading);

    let counts: Vec<i64> = api.calls().into_iter().map(|(_, count)| count).collect();
    assert_eq!(counts, (1..=10).collect::<Vec<_>>());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_subscriber_sees_optimistic_then_settled_state() {
    let system = system_with(Arc::new(RecordingApi::default()));
    let mut changes = system.counter_client.subscribe();

    system.counter_client.increment().await.unwrap();

    // Increment, then SendCounter, then SetLoading(false).
    let optimistic = changes.recv().await.unwrap();
    assert_eq!(
        optimistic,
        CounterState {
            count: 1,
            is_loading: true,
            error: None
        }
    );
    let synced = changes.recv().await.unwrap();
    assert!(synced.is_loading);
    let settled = changes.recv().await.unwrap();
    assert_eq!(
        settled,
        CounterState {
            count: 1,
            is_loading: false,
            error: None
        }
    );
    assert_eq!(system.counter_client.current(), settled);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_highlight_carries_current_count() {
    let mut system = system_with(Arc::new(RecordingApi::default()));

    system.counter_client.increment().await.unwrap();
    system.counter_client.increment().await.unwrap();

    let route = system.highlight_current();
    assert_eq!(route, Route::CountHighlight { count: 2 });
    assert_eq!(system.router.current(), Some(&route));
    assert_eq!(system.router.depth(), 1);

    assert_eq!(system.router.navigate_back(), Some(route));
    assert_eq!(system.router.current(), None);
    assert_eq!(system.router.navigate_back(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_with_outstanding_clone() {
    let system = system_with(Arc::new(RecordingApi::default()));
    let extra = system.counter_client.clone();

    let shutdown = tokio::spawn(system.shutdown());

    // The store stays up while a clone is alive.
    let state = extra.increment().await.unwrap();
    assert_eq!(state.count, 1);

    drop(extra);
    shutdown.await.unwrap().unwrap();
}
