//! # FeatureClient Trait
//!
//! Common interface for feature-specific clients, adding default `state` and `send` methods
//! built on top of a generic `StoreClient`.
use crate::{Reducer, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for feature clients to inherit the generic store operations with their own error type.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use store_framework::{FeatureClient, Reducer, Step, StoreClient, StoreError};
///
/// #[derive(Debug)]
/// enum ToggleAction { Flip }
///
/// struct Toggle;
///
/// #[async_trait]
/// impl Reducer for Toggle {
///     type State = bool;
///     type Action = ToggleAction;
///     type Environment = ();
///
///     async fn reduce(&self, on: &bool, _: ToggleAction, _: &()) -> Step<bool, ToggleAction> {
///         Step::done(!on)
///     }
/// }
///
/// #[derive(Debug)]
/// struct ToggleError(String);
///
/// struct ToggleClient {
///     inner: StoreClient<Toggle>,
/// }
///
/// impl FeatureClient<Toggle> for ToggleClient {
///     type Error = ToggleError;
///
///     fn inner(&self) -> &StoreClient<Toggle> {
///         &self.inner
///     }
///
///     fn map_error(e: StoreError) -> Self::Error {
///         ToggleError(e.to_string())
///     }
/// }
///
/// async fn usage(client: ToggleClient) {
///     // state() and send() are provided automatically.
///     let _ = client.send(ToggleAction::Flip).await;
///     let _ = client.state().await;
/// }
/// ```
#[async_trait]
pub trait FeatureClient<R: Reducer>: Send + Sync {
    /// The feature-specific error type.
    type Error: Send;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<R>;

    /// Map framework errors to the feature error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch the state as seen by the store loop.
    #[tracing::instrument(skip(self))]
    async fn state(&self) -> Result<R::State, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().state().await.map_err(Self::map_error)
    }

    /// Dispatch a raw action.
    #[tracing::instrument(skip(self))]
    async fn send(&self, action: R::Action) -> Result<R::State, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(action).await.map_err(Self::map_error)
    }
}
