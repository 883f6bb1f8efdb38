//! Entity trait implementation for the Dish domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation
//! that enables [`Dish`] to be managed by the generic [`resource_actor::ResourceActor`].

use super::error::DishError;
use crate::model::{Dish, DishCreate, DishId};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Action = Infallible; // catalog entries are never changed
    type ActionResult = ();
    type Context = ();
    type Error = DishError;

    /// Creates a new Dish from creation parameters.
    ///
    /// The name is stored trimmed and must not be blank.
    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, DishError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(DishError::ValidationError(
                "dish name must not be empty".to_string(),
            ));
        }
        Ok(Self::new(id, name))
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), DishError> {
        match action {}
    }
}
