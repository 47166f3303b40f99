use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

use super::{ApiError, CounterApi};
use crate::config::ApiConfig;
use crate::model::{CounterActionKind, CounterPayload};

/// `CounterApi` backed by an HTTP POST of a [`CounterPayload`].
pub struct LiveCounterApi {
    client: Client,
    url: String,
    include_action: bool,
}

impl LiveCounterApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            url: config.base_url.clone(),
            include_action: config.include_action,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CounterApi for LiveCounterApi {
    async fn send_counter(&self, action: CounterActionKind, count: i64) -> Result<(), ApiError> {
        let payload = CounterPayload::new(self.include_action.then_some(action), count);

        tracing::debug!(url = %self.url, ?payload, "Sending counter");

        let start = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "Counter endpoint rejected sync");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        tracing::info!(%action, count, latency_ms, "Counter synced");
        Ok(())
    }
}
