//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; placement validation and the status state machine run
//! inside the actor (see [`crate::order_actor`]), so every method here is a single round trip.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, StatusChange};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored: pending, no estimate, one item per dish id.
    ///
    /// # Errors
    /// `EmptyOrder`, `InvalidPerson` or `InvalidDish`. Nothing is recorded on error.
    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, person_id = %order.person_id, "Order placed");
        Ok(order)
    }

    /// Moves an order to `target`, which must be its immediate successor.
    ///
    /// `estimated_minutes` is required for `InPreparation` and ignored for `Finalized`.
    #[instrument(skip(self))]
    pub async fn advance_status(
        &self,
        id: OrderId,
        target: OrderStatus,
        estimated_minutes: Option<u32>,
    ) -> Result<Order, OrderError> {
        let change = StatusChange {
            target,
            estimated_minutes,
            expected_version: None,
        };
        self.apply(id, change).await
    }

    /// Same as [`advance_status`](Self::advance_status), but only if the order is still at
    /// `expected_version`. Otherwise fails with `ConcurrentModification` and changes nothing.
    #[instrument(skip(self))]
    pub async fn advance_status_if(
        &self,
        id: OrderId,
        expected_version: u32,
        target: OrderStatus,
        estimated_minutes: Option<u32>,
    ) -> Result<Order, OrderError> {
        let change = StatusChange {
            target,
            estimated_minutes,
            expected_version: Some(expected_version),
        };
        self.apply(id, change).await
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    /// Stored orders accepted by `filter`, in id order.
    pub async fn orders_where(&self, filter: Filter<Order>) -> Result<Vec<Order>, OrderError> {
        self.list(filter).await
    }

    async fn apply(&self, id: OrderId, change: StatusChange) -> Result<Order, OrderError> {
        debug!(?change, "Sending request");
        let order = self
            .inner
            .perform_action(id, OrderAction::AdvanceStatus(change))
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => OrderError::OrderNotFound(id),
                other => Self::map_error(other),
            })?;
        info!(order_id = %id, status = %order.status, version = order.version, "Status advanced");
        Ok(order)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
