//! # Dish Client
//!
//! Provides a high‑level API for interacting with the `Dish` actor.
//! It wraps a `ResourceClient<Dish>` and exposes catalog methods.
use crate::dish_actor::DishError;
use crate::model::{Dish, DishCreate};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    /// Adds a dish to the catalog and returns it with its assigned id.
    #[instrument(skip(self))]
    pub async fn add_dish(&self, params: DishCreate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The whole catalog in id order, which is the menu order.
    #[instrument(skip(self))]
    pub async fn list_dishes(&self) -> Result<Vec<Dish>, DishError> {
        self.list(Filter::all()).await
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<DishError>() {
            Ok(err) => err,
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DishId;
    use resource_actor::mock::MockClient;

    #[tokio::test]
    async fn test_add_dish_recovers_validation_error() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                DishError::ValidationError("dish name must not be empty".into()),
            )));

        let client = DishClient::new(mock.client());
        let err = client.add_dish(DishCreate::new("")).await.unwrap_err();

        assert_eq!(
            err,
            DishError::ValidationError("dish name must not be empty".into())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_get(DishId(1))
            .return_err(FrameworkError::ActorClosed);

        let client = DishClient::new(mock.client());
        assert!(matches!(
            client.get(DishId(1)).await,
            Err(DishError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
