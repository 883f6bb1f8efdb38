//! # ActorClient Trait
//!
//! Common surface for resource-specific clients: default `get` and `list` built on the inner
//! `ResourceClient`, with framework errors mapped into the resource's own error type.
use crate::{ActorEntity, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Seat { id: u32 }
/// #[derive(Debug)] struct SeatCreate;
/// #[derive(Debug)] enum SeatAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SeatError(String);
///
/// impl From<String> for SeatError {
///     fn from(s: String) -> Self { SeatError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Seat {
///     type Id = u32;
///     type Create = SeatCreate;
///     type Action = SeatAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SeatError;
///
///     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SeatClient { inner: ResourceClient<Seat> }
///
/// #[async_trait]
/// impl ActorClient<Seat> for SeatClient {
///     type Error = SeatError;
///
///     fn inner(&self) -> &ResourceClient<Seat> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { SeatError(e.to_string()) }
/// }
///
/// async fn usage(client: SeatClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list(resource_actor::Filter::all()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity accepted by `filter`, in id order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Filter<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }
}
